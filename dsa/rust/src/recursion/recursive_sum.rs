/// Sum of `nums`, computed as head plus the sum of the tail.
pub fn recursive_sum(nums: &[i32]) -> i64 {
    match nums {
        [] => 0,
        [head, tail @ ..] => *head as i64 + recursive_sum(tail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(0, recursive_sum(&[]));
    }

    #[test]
    fn test_case_1() {
        assert_eq!(15, recursive_sum(&[1, 2, 3, 4, 5]));
        assert_eq!(-3, recursive_sum(&[-1, 5, -7]));
    }

    #[test]
    fn does_not_overflow_i32() {
        assert_eq!(2 * i32::MAX as i64, recursive_sum(&[i32::MAX, i32::MAX]));
    }
}
