use std::collections::HashMap;
use std::collections::hash_map::Entry;

use keymaze_core::Point;

use crate::key_comb::KeyCombination;

/// Best known cost from the start to each (coordinate, key combination)
/// state a search has reached.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    costs: HashMap<Point, HashMap<KeyCombination, f64>>,
}

impl DistanceTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding only the start state at cost 0.
    pub fn with_start(start: Point) -> Self {
        let mut table = Self::new();
        table.insert(start, KeyCombination::EMPTY, 0.0);
        table
    }

    /// Cost recorded for state (`p`, `comb`).
    #[inline]
    pub fn get(&self, p: Point, comb: KeyCombination) -> Option<f64> {
        self.costs.get(&p)?.get(&comb).copied()
    }

    /// Whether state (`p`, `comb`) has been recorded.
    #[inline]
    pub fn contains(&self, p: Point, comb: KeyCombination) -> bool {
        self.get(p, comb).is_some()
    }

    /// Record `cost` for (`p`, `comb`), overwriting any previous value.
    pub fn insert(&mut self, p: Point, comb: KeyCombination, cost: f64) {
        self.costs.entry(p).or_default().insert(comb, cost);
    }

    /// Record `cost` for (`p`, `comb`) only if the state is new.
    /// Returns whether it was written.
    pub fn insert_new(&mut self, p: Point, comb: KeyCombination, cost: f64) -> bool {
        match self.costs.entry(p).or_default().entry(comb) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(cost);
                true
            }
        }
    }

    /// Record `cost` for (`p`, `comb`) if the state is new or `cost` beats
    /// the recorded one. Returns whether it was written.
    pub fn improve(&mut self, p: Point, comb: KeyCombination, cost: f64) -> bool {
        match self.costs.entry(p).or_default().entry(comb) {
            Entry::Occupied(mut slot) => {
                if cost < *slot.get() {
                    slot.insert(cost);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(cost);
                true
            }
        }
    }

    /// The cheapest state at `p`, as `(combination, cost)`. Ties go to the
    /// combination with the smaller bitmask so the choice is stable.
    pub fn best_at(&self, p: Point) -> Option<(KeyCombination, f64)> {
        self.costs
            .get(&p)?
            .iter()
            .map(|(&comb, &cost)| (comb, cost))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.bits().cmp(&b.0.bits())))
    }

    /// All combinations recorded at `p` with their costs.
    pub fn states_at(&self, p: Point) -> impl Iterator<Item = (KeyCombination, f64)> + '_ {
        self.costs
            .get(&p)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&comb, &cost)| (comb, cost)))
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize {
        self.costs.values().map(HashMap::len).sum()
    }

    /// Whether no state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.costs.values().all(HashMap::is_empty)
    }
}
