use tracing::trace;

use super::{RecursionError, Result};

/// Counts down from `start` to `end_inclusive` by `step`, recursively.
///
/// `before` sees each value on the way down, `after` sees them on the way back up,
/// so `after` observes the values in reverse order.
pub fn countdown<B, A>(start: i32, end_inclusive: i32, step: i32, mut before: B, mut after: A) -> Result<()>
where
    B: FnMut(i32),
    A: FnMut(i32),
{
    if step <= 0 {
        return Err(RecursionError::NonPositiveStep(step));
    }

    countdown_from(Some(start), end_inclusive, step, &mut before, &mut after);
    Ok(())
}

fn countdown_from<B, A>(current: Option<i32>, end_inclusive: i32, step: i32, before: &mut B, after: &mut A)
where
    B: FnMut(i32),
    A: FnMut(i32),
{
    let current = match current {
        Some(c) if c >= end_inclusive => c,
        _ => return,
    };

    trace!(current, "countdown");
    before(current);
    countdown_from(current.checked_sub(step), end_inclusive, step, before, after);
    after(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_the_callbacks() {
        let start = 5;
        let mut before_count = 0;
        let mut after_count = 0;

        countdown(start, 1, 1, |_| before_count += 1, |_| after_count += 1).unwrap();

        assert_eq!(start, before_count);
        assert_eq!(start, after_count);
    }

    #[test]
    fn callback_order() {
        let mut before = Vec::new();
        let mut after = Vec::new();

        countdown(5, 1, 1, |n| before.push(n), |n| after.push(n)).unwrap();

        assert_eq!(vec![5, 4, 3, 2, 1], before);
        assert_eq!(vec![1, 2, 3, 4, 5], after);
    }

    #[test]
    fn step() {
        let mut before = Vec::new();

        countdown(10, 0, 3, |n| before.push(n), |_| {}).unwrap();

        assert_eq!(vec![10, 7, 4, 1], before);
    }

    #[test]
    fn start_below_end() {
        let mut before_calls = 0;
        let mut after_calls = 0;

        countdown(0, 1, 1, |_| before_calls += 1, |_| after_calls += 1).unwrap();

        assert_eq!(0, before_calls);
        assert_eq!(0, after_calls);
    }

    #[test]
    fn start_equals_end() {
        let mut before = Vec::new();

        countdown(3, 3, 1, |n| before.push(n), |_| {}).unwrap();

        assert_eq!(vec![3], before);
    }

    #[test]
    fn stops_at_i32_min() {
        let mut before = Vec::new();

        countdown(i32::MIN + 1, i32::MIN, 1, |n| before.push(n), |_| {}).unwrap();

        assert_eq!(vec![i32::MIN + 1, i32::MIN], before);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(Err(RecursionError::NonPositiveStep(0)), countdown(5, 1, 0, |_| {}, |_| {}));
        assert_eq!(Err(RecursionError::NonPositiveStep(-1)), countdown(5, 1, -1, |_| {}, |_| {}));
    }
}
