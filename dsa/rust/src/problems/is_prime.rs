use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrimeError {
    #[error("primality is only defined for positive numbers, got {0}")]
    NotPositive(i32),
}

type Result<T> = std::result::Result<T, PrimeError>;

/// Trial division up to and including `sqrt(n)`.
pub fn is_prime(n: i32) -> Result<bool> {
    if n <= 0 {
        return Err(PrimeError::NotPositive(n));
    }

    match n {
        1 => return Ok(false),
        2 | 3 => return Ok(true),
        _ if n % 2 == 0 => return Ok(false),
        _ => {}
    }

    let n = n as i64;
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return Ok(false);
        }
        i += 2;
    }

    Ok(true)
}
