//! Basic recursion exercises.

use thiserror::Error;

mod countdown;
mod fibonacci;
mod recursive_sum;

pub use countdown::countdown;
pub use fibonacci::{
    fibonacci_binet, fibonacci_iterative, fibonacci_memoized, fibonacci_recursive, MAX_BINET_INDEX,
    MAX_FIBONACCI_INDEX,
};
pub use recursive_sum::recursive_sum;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecursionError {
    #[error("step must be positive, got {0}")]
    NonPositiveStep(i32),
    #[error("fibonacci number {0} does not fit in 64 bits")]
    FibonacciOverflow(u32),
    #[error("fibonacci number {0} is beyond the precision of the closed form")]
    BinetPrecision(u32),
}

type Result<T> = std::result::Result<T, RecursionError>;
