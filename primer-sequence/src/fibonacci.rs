//! Fibonacci sequence generation
//!
//! Linear iteration over a rolling pair of terms. No memoization, no
//! recursion; generating N terms is O(N).

use primer_core::PrimerError;

/// Generate the first `n` Fibonacci terms, seeded 0, 1.
///
/// `generate(1)` → `[0]`, `generate(2)` → `[0, 1]`, longer sequences
/// extend by summing the last two terms. Fails with INVALID_ARGUMENT
/// when `n` is not positive, and with OVERFLOW if a term exceeds u128
/// (terms are never wrapped silently).
pub fn generate(n: i64) -> Result<Vec<u128>, PrimerError> {
    if n <= 0 {
        return Err(
            PrimerError::invalid_argument(format!("term count must be a positive integer, got {}", n))
                .with_suggestion("Request at least 1 term"),
        );
    }

    let count = n as usize;
    // Capacity hint only; u128 overflows at term 187, so never preallocate past it
    let mut terms: Vec<u128> = Vec::with_capacity(count.min(187));
    terms.push(0);
    if count >= 2 {
        terms.push(1);
    }

    for i in 2..count {
        let next = terms[i - 1]
            .checked_add(terms[i - 2])
            .ok_or_else(|| PrimerError::overflow(format!("fibonacci term {} exceeds u128", i)))?;
        terms.push(next);
    }

    Ok(terms)
}
