//! Prime generation with the Sieve of Eratosthenes.
//!
//! Starting from 2, cross out every multiple of each integer that is still
//! uncrossed. Every composite up to `max` has a prime factor no larger than
//! `sqrt(max)`, so the crossing out can stop there.

/// All primes up to and including `max_value`, ascending.
///
/// ```
/// use bowling_score::primes::generate_primes;
/// assert_eq!(generate_primes(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(generate_primes(1).is_empty());
/// ```
///
/// # Panics
///
/// Panics if `max_value` is `usize::MAX`: the sieve needs a slot for every
/// integer up to and including `max_value`.
pub fn generate_primes(max_value: usize) -> Vec<usize> {
    if max_value < 2 {
        return Vec::new();
    }

    let len = max_value
        .checked_add(1)
        .expect("sieve bound must be below usize::MAX");
    let mut crossed_out = vec![false; len];
    crossed_out[0] = true;
    crossed_out[1] = true;

    let mut i = 2;
    while i * i <= max_value {
        if !crossed_out[i] {
            for multiple in (i * i..=max_value).step_by(i) {
                crossed_out[multiple] = true;
            }
        }
        i += 1;
    }

    crossed_out
        .iter()
        .enumerate()
        .filter(|(_, crossed)| !**crossed)
        .map(|(n, _)| n)
        .collect()
}
