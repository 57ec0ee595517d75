use std::cmp::Ordering;
use std::collections::BinaryHeap;

use keymaze_core::Point;

use crate::key_comb::KeyCombination;

/// A state waiting in the frontier.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: f64,
    pub(crate) comb: KeyCombination,
    pub(crate) pos: Point,
}

/// Pop order of the frontier: lowest priority first, then the combination
/// holding more keys, then the coordinate.
pub(crate) fn pop_order(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
    a.priority
        .total_cmp(&b.priority)
        .then_with(|| a.comb.priority_cmp(&b.comb))
        .then_with(|| a.pos.cmp(&b.pos))
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the first entry in pop order.
        pop_order(other, self)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search states.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub(crate) fn push(&mut self, priority: f64, comb: KeyCombination, pos: Point) {
        self.heap.push(FrontierEntry {
            priority,
            comb,
            pos,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: f64, bits: u64, x: i32) -> FrontierEntry {
        FrontierEntry {
            priority,
            comb: KeyCombination::from_bits(bits),
            pos: Point::new(x, 0),
        }
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::default();
        f.push(3.0, KeyCombination::EMPTY, Point::new(3, 0));
        f.push(1.0, KeyCombination::EMPTY, Point::new(1, 0));
        f.push(2.5, KeyCombination::EMPTY, Point::new(2, 0));
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.pos.x).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn ties_prefer_more_keys() {
        let mut f = Frontier::default();
        f.push(2.0, KeyCombination::from_bits(0b1), Point::new(0, 0));
        f.push(2.0, KeyCombination::from_bits(0b111), Point::new(1, 0));
        f.push(2.0, KeyCombination::EMPTY, Point::new(2, 0));
        let counts: Vec<_> = std::iter::from_fn(|| f.pop())
            .map(|e| e.comb.keys_count())
            .collect();
        assert_eq!(counts, vec![3, 1, 0]);
    }

    #[test]
    fn pop_order_is_explicit() {
        assert_eq!(pop_order(&entry(1.0, 0, 0), &entry(2.0, 0b11, 0)), Ordering::Less);
        assert_eq!(pop_order(&entry(1.0, 0b11, 5), &entry(1.0, 0, 0)), Ordering::Less);
        assert_eq!(pop_order(&entry(1.0, 0, 0), &entry(1.0, 0, 1)), Ordering::Less);
        assert_eq!(pop_order(&entry(1.0, 1, 1), &entry(1.0, 2, 1)), Ordering::Equal);
    }
}
