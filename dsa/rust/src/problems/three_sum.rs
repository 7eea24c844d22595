use std::cmp::Ordering;

use tracing::{debug, trace};

/// Finds every unique triplet of values in `nums` that sums to zero.
///
/// The input is sorted in place, so indices are lost and only values are reported.
/// Each triplet is ascending and triplets come out ordered by their first, then second value.
/// Inputs shorter than three values simply yield no triplets.
pub fn three_sum(mut nums: Vec<i32>) -> Vec<[i32; 3]> {
    let mut results = Vec::new();
    if nums.len() < 3 {
        return results;
    }

    nums.sort_unstable();

    for (i, &ni) in nums.iter().enumerate() {
        if ni > 0 {
            break;
        }

        if i > 0 && ni == nums[i - 1] {
            continue;
        }

        let target = -(ni as i64);
        let mut left = i + 1;
        let mut right = nums.len() - 1;

        while left < right {
            if left > i + 1 && nums[left] == nums[left - 1] {
                left += 1;
                continue;
            }

            let nl = nums[left];
            let nr = nums[right];

            match (nl as i64 + nr as i64).cmp(&target) {
                Ordering::Equal => {
                    trace!(ni, nl, nr, "found triplet");
                    results.push([ni, nl, nr]);
                    left += 1;
                }
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
            }
        }
    }

    debug!(len = nums.len(), triplets = results.len(), "three_sum done");
    results
}
