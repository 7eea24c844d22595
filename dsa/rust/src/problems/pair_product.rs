use std::collections::HashMap;

/// Indices `(i, j)`, `i < j`, of two values whose product is `target`.
///
/// Same scan as [`pair_sum`](super::pair_sum), with division in place of subtraction.
/// Zero is handled separately since it divides nothing.
pub fn pair_product(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let target = target as i64;
    let mut index_by_num: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    let mut first_zero: Option<usize> = None;

    for (i, &n) in nums.iter().enumerate() {
        let n = n as i64;

        if target == 0 {
            // Any earlier value pairs with a zero, and a zero pairs with any earlier value.
            if n == 0 && i > 0 {
                return Some((0, i));
            }
            if let Some(z) = first_zero {
                return Some((z, i));
            }
        } else if n != 0 && target % n == 0 {
            if let Some(&j) = index_by_num.get(&(target / n)) {
                return Some((j, i));
            }
        }

        if n == 0 && first_zero.is_none() {
            first_zero = Some(i);
        }
        index_by_num.entry(n).or_insert(i);
    }

    None
}

pub fn pair_product_brute_force(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] as i64 * nums[j] as i64 == target as i64 {
                return Some((i, j));
            }
        }
    }

    None
}
