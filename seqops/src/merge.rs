//! Merging of adjacent non-coprime values.

use crate::SeqError;
use log::debug;
use num_traits::PrimInt;

/// Repeatedly replaces any two adjacent non-coprime values with their
/// least common multiple until every adjacent pair is coprime.
///
/// The result does not depend on the order in which pairs are merged,
/// so a single left-to-right pass with a stack suffices.
pub fn replace_non_coprimes<T>(values: &[T]) -> Result<Vec<T>, SeqError>
where
    T: PrimInt,
{
    let mut stack: Vec<T> = Vec::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        if value <= T::zero() {
            return Err(SeqError::NonPositive { index });
        }

        let mut merged = value;
        while let Some(&top) = stack.last() {
            let divisor = gcd(merged, top);
            if divisor == T::one() {
                break;
            }
            stack.pop();
            merged = (merged / divisor)
                .checked_mul(&top)
                .ok_or(SeqError::Overflow { index })?;
        }
        stack.push(merged);
    }

    debug!("merged non-coprimes; len: {}, merged_len: {}", values.len(), stack.len());
    Ok(stack)
}

/// Euclid's algorithm. Both arguments must be positive.
fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
