//! Prime sizing for backing tables.
//!
//! Both map variants size their tables to a prime so that `hash % capacity`
//! spreads keys well, and so that the quadratic probe sequence of the
//! open-addressing map visits `(capacity + 1) / 2` distinct slots.

/// Returns true if `n` is prime.
///
/// `2` and `3` are prime; `0`, `1` and every other even number are not.
/// Remaining candidates are trial-divided by odd factors up to `sqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }
    let mut factor = 3usize;
    // factor <= n / factor avoids overflowing factor * factor near usize::MAX.
    while factor <= n / factor {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }
    true
}

/// Steps from `n` to the nearest prime using odd candidates only.
///
/// An even `n` starts at `n + 1`, so `next_prime(2) == 3` and
/// `next_prime(0) == 3`. Used when a map is constructed.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

/// `n` itself when it is already prime, otherwise [`next_prime`]`(n)`.
///
/// Used by `resize_table`, which keeps a prime request as-is (including 2).
pub fn prime_at_least(n: usize) -> usize {
    if is_prime(n) {
        n
    } else {
        next_prime(n)
    }
}
