use std::collections::HashMap;

use tracing::trace;

use super::{RecursionError, Result};

/// Largest index whose fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: u32 = 93;

/// Largest index the `f64` closed form is trusted for; beyond it rounding error exceeds 0.5.
pub const MAX_BINET_INDEX: u32 = 70;

fn check_index(n: u32) -> Result<()> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(RecursionError::FibonacciOverflow(n));
    }
    Ok(())
}

/// Naive recursion, O(2^n) time and O(n) stack.
pub fn fibonacci_recursive(n: u32) -> Result<u64> {
    check_index(n)?;
    Ok(fib(n))
}

fn fib(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fib(n - 1) + fib(n - 2),
    }
}

/// O(n) time, O(1) space.
pub fn fibonacci_iterative(n: u32) -> Result<u64> {
    check_index(n)?;

    let (mut prev, mut curr) = (0u64, 1u64);
    if n == 0 {
        return Ok(prev);
    }

    for _ in 2..=n {
        (prev, curr) = (curr, prev + curr);
    }

    Ok(curr)
}

/// Top-down recursion reusing results stored in `cache`.
///
/// Every index from 2 up to `n` that gets computed is left in the cache,
/// so a later call with the same cache only pays for the new indices.
pub fn fibonacci_memoized(n: u32, cache: &mut HashMap<u32, u64>) -> Result<u64> {
    check_index(n)?;
    Ok(fib_memo(n, cache))
}

fn fib_memo(n: u32, cache: &mut HashMap<u32, u64>) -> u64 {
    if n < 2 {
        return n as u64;
    }

    if let Some(&value) = cache.get(&n) {
        trace!(n, "fibonacci cache hit");
        return value;
    }

    let result = fib_memo(n - 1, cache) + fib_memo(n - 2, cache);
    cache.insert(n, result);
    result
}

/// Closed form `(phi^n - psi^n) / sqrt(5)`, rounded to the nearest integer.
pub fn fibonacci_binet(n: u32) -> Result<u64> {
    check_index(n)?;
    if n > MAX_BINET_INDEX {
        return Err(RecursionError::BinetPrecision(n));
    }

    let sqrt5 = 5f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let psi = (1.0 - sqrt5) / 2.0;

    let result = (phi.powf(n as f64) - psi.powf(n as f64)) / sqrt5;
    Ok(result.round() as u64)
}
