use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// An item tagged with its score and input position.
/// Total order: higher score first, then earlier input position.
struct Ranked<T> {
    score: f64,
    seq: usize,
    item: T,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores here are finite (means of finite weights), so the
        // partial_cmp fallback is unreachable in practice.
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Selects the `k` highest-scoring items without sorting the whole input.
///
/// Keeps a bounded min-heap of size `k`, so the cost is O(n log k) for a
/// pool of n. The result is ordered by descending score; equal scores
/// keep their input order (callers wanting an id tie-break pass input
/// ordered by id). `k = 0` or an empty input yields an empty result.
pub fn select_top_k<T>(items: Vec<T>, k: usize, score: impl Fn(&T) -> f64) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Ranked<T>>> = BinaryHeap::with_capacity(k + 1);
    for (seq, item) in items.into_iter().enumerate() {
        let entry = Ranked {
            score: score(&item),
            seq,
            item,
        };
        if heap.len() < k {
            heap.push(Reverse(entry));
        } else if heap.peek().is_some_and(|min| entry > min.0) {
            heap.pop();
            heap.push(Reverse(entry));
        }
    }

    let mut selected: Vec<Ranked<T>> = heap.into_iter().map(|r| r.0).collect();
    selected.sort_by(|a, b| b.cmp(a));
    selected.into_iter().map(|r| r.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(items: &[f64], k: usize) -> Vec<f64> {
        let mut sorted = items.to_vec();
        // Stable sort, so ties keep input order, same as select_top_k.
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        sorted.truncate(k);
        sorted
    }

    #[test]
    fn test_returns_min_of_k_and_pool_size() {
        let items: Vec<f64> = (0..15).map(|i| i as f64).collect();
        assert_eq!(select_top_k(items.clone(), 10, |x| *x).len(), 10);
        assert_eq!(select_top_k(items[..3].to_vec(), 10, |x| *x).len(), 3);
    }

    #[test]
    fn test_result_is_descending() {
        let items = vec![0.2, 0.9, 0.1, 0.7, 0.7, 0.3];
        let top = select_top_k(items, 4, |x| *x);
        for pair in top.windows(2) {
            assert!(pair[0] >= pair[1], "Out of order: {pair:?}");
        }
    }

    #[test]
    fn test_matches_brute_force_full_sort() {
        // Fixed pseudo-random pool; heap and full sort must agree.
        let items: Vec<f64> = (0..50).map(|i| ((i * 37 + 11) % 23) as f64 / 23.0).collect();
        for k in [0, 1, 5, 10, 49, 50, 60] {
            let top = select_top_k(items.clone(), k, |x| *x);
            assert_eq!(top, brute_force(&items, k), "Disagreement at k={k}");
        }
    }

    #[test]
    fn test_small_pool_returned_whole_and_sorted() {
        let items = vec![0.1, 0.8, 0.5];
        let top = select_top_k(items, 10, |x| *x);
        assert_eq!(top, vec![0.8, 0.5, 0.1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![("a", 0.5), ("b", 0.5), ("c", 0.9), ("d", 0.5)];
        let top = select_top_k(items, 3, |(_, s)| *s);
        let names: Vec<&str> = top.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_zero_k_and_empty_input() {
        assert!(select_top_k(vec![1.0, 2.0], 0, |x| *x).is_empty());
        assert!(select_top_k(Vec::<f64>::new(), 5, |x| *x).is_empty());
    }
}
