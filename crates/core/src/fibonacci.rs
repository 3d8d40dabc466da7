//! Fibonacci numbers by naive double recursion
//!
//! `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n - 1) + fib(n - 2)`.
//!
//! The recursion is exponential in `n`. Every index up to [`MAX_INDEX`]
//! is representable, but anything past the mid-forties takes a noticeable
//! amount of time.
//!
//! # Negative indices
//!
//! The base case is `n <= 1`, which every negative index satisfies, so
//! `fib(n) == n` for `n < 0`. There is no deeper recursion for them.

/// Largest index whose Fibonacci number fits in an `i64`.
///
/// `fib(92) = 7540113804746346429`; `fib(93)` exceeds `i64::MAX`.
pub const MAX_INDEX: i64 = 92;

/// Compute the nth Fibonacci number.
///
/// Overflows for `n > MAX_INDEX`; use [`checked_fib`] when the index is
/// not already known to be in range.
pub fn fib(n: i64) -> i64 {
    if n <= 1 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Compute the nth Fibonacci number, returning `None` on overflow.
///
/// Indices above [`MAX_INDEX`] return `None` without recursing.
pub fn checked_fib(n: i64) -> Option<i64> {
    if n > MAX_INDEX {
        return None;
    }
    checked_fib_as(n, i64::checked_add)
}

/// Same recursion in any integer type `T` with a checked `add`.
///
/// `None` when a base case does not fit in `T` or an addition overflows.
fn checked_fib_as<T: TryFrom<i64>>(n: i64, add: fn(T, T) -> Option<T>) -> Option<T> {
    if n <= 1 {
        T::try_from(n).ok()
    } else {
        add(checked_fib_as(n - 1, add)?, checked_fib_as(n - 2, add)?)
    }
}
