use std::collections::HashMap;

/// Indices `(i, j)`, `i < j`, of two values adding up to `target`.
///
/// Single pass: the pair returned is the first one completed while scanning
/// left to right.
pub fn pair_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut index_by_num: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &n) in nums.iter().enumerate() {
        let complement = target as i64 - n as i64;

        match index_by_num.get(&complement) {
            Some(&j) => return Some((j, i)),
            None => index_by_num.entry(n as i64).or_insert(i),
        };
    }

    None
}

pub fn pair_sum_brute_force(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] as i64 + nums[j] as i64 == target as i64 {
                return Some((i, j));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&[i32], i32, Option<(usize, usize)>)] = &[
        (&[3, 2, 5, 4, 1], 8, Some((0, 2))),
        (&[4, 7, 9, 2, 5, 1], 5, Some((0, 5))),
        (&[4, 7, 9, 2, 5, 1], 3, Some((3, 5))),
        (&[4, 7, 9, 2, 5, 1], 20, None),
        (&[4, -7, 9, -2, 5, 1], -9, Some((1, 3))),
        (&[4, -7, 9, 21, 5, 1], 14, Some((1, 3))),
        (&[], 1, None),
    ];

    #[test]
    fn hashed() {
        for &(nums, target, expected) in CASES {
            assert_eq!(expected, pair_sum(nums, target), "{nums:?} -> {target}");
        }
    }

    #[test]
    fn brute_force() {
        for &(nums, target, expected) in CASES {
            assert_eq!(expected, pair_sum_brute_force(nums, target), "{nums:?} -> {target}");
        }
    }

    #[test]
    fn same_value_twice() {
        assert_eq!(Some((1, 3)), pair_sum(&[1, 3, 4, 3], 6));
        assert_eq!(Some((1, 3)), pair_sum_brute_force(&[1, 3, 4, 3], 6));
    }

    #[test]
    fn first_completed_pair_wins() {
        assert_eq!(Some((0, 2)), pair_sum(&[1, 3, 5, 3], 6));
        assert_eq!(Some((0, 2)), pair_sum_brute_force(&[1, 3, 5, 3], 6));
    }

    #[test]
    fn does_not_pair_with_itself() {
        assert_eq!(None, pair_sum(&[3], 6));
        assert_eq!(None, pair_sum_brute_force(&[3], 6));
    }

    #[test]
    fn extreme_values() {
        assert_eq!(Some((0, 1)), pair_sum(&[i32::MAX, i32::MIN], -1));
        assert_eq!(None, pair_sum(&[i32::MAX, 1], i32::MIN));
    }
}
