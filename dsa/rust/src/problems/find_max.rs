/// Largest value in `nums`, `None` when empty.
pub fn find_max(nums: &[i32]) -> Option<i32> {
    let (&first, rest) = nums.split_first()?;

    let mut max = first;
    for &n in rest {
        if n > max {
            max = n;
        }
    }

    Some(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert_eq!(Some(10), find_max(&[4, 7, 2, 8, 10, 9]));
        assert_eq!(Some(-2), find_max(&[-4, -7, -2, -8, -10, -9]));
        assert_eq!(None, find_max(&[]));
    }

    #[test]
    fn single() {
        assert_eq!(Some(i32::MIN), find_max(&[i32::MIN]));
    }
}
