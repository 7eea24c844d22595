use std::collections::HashSet;

/// Values present in both `a` and `b`, each reported once, in the order they first appear in `a`.
pub fn intersection(a: &[i32], b: &[i32]) -> Vec<i32> {
    let in_b: HashSet<i32> = b.iter().copied().collect();
    let mut emitted = HashSet::with_capacity(in_b.len().min(a.len()));

    a.iter()
        .copied()
        .filter(|n| in_b.contains(n) && emitted.insert(*n))
        .collect()
}
