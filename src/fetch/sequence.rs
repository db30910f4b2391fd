//! Fibonacci sequence computation
//!
//! Orders start at 1: F(1) = F(2) = 1, F(4) = 3.

use std::collections::HashMap;

use crate::error::UpstreamError;

/// Largest order whose value fits in a `u64`.
pub const MAX_ORDER: u64 = 93;

fn check_order(order: u64) -> Result<(), UpstreamError> {
    match order {
        0 => Err(UpstreamError::OrderOutOfRange(order)),
        o if o > MAX_ORDER => Err(UpstreamError::Overflow(order)),
        _ => Ok(()),
    }
}

/// Computes the value for `order` with a running pair.
pub fn fibonacci_iterative(order: u64) -> Result<u64, UpstreamError> {
    check_order(order)?;

    let (mut previous, mut current) = (0u64, 1u64);
    for _ in 1..order {
        let next = previous
            .checked_add(current)
            .ok_or(UpstreamError::Overflow(order))?;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// Computes the value for `order` by memoized recursion.
pub fn fibonacci_recursive(order: u64) -> Result<u64, UpstreamError> {
    check_order(order)?;

    fn fib(n: u64, memo: &mut HashMap<u64, u64>) -> Option<u64> {
        if n <= 2 {
            return Some(1);
        }
        if let Some(&value) = memo.get(&n) {
            return Some(value);
        }
        let value = fib(n - 1, memo)?.checked_add(fib(n - 2, memo)?)?;
        memo.insert(n, value);
        Some(value)
    }

    fib(order, &mut HashMap::new()).ok_or(UpstreamError::Overflow(order))
}
