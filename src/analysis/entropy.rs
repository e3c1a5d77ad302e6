//! Shannon entropy of a string's character distribution.

use std::collections::BTreeMap;

/// Calculates the Shannon entropy (in bits) of the characters in `s`.
///
/// Each distinct Unicode scalar value is one symbol. Returns `0.0` for the
/// empty string. Symbols are summed in code point order so the result is
/// reproducible bit for bit. Randomized, algorithmically generated hostnames
/// score higher than dictionary words.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    let len = total as f64;
    let entropy: f64 = counts
        .values()
        .map(|&n| {
            let p = n as f64 / len;
            -p * p.log2()
        })
        .sum();

    // A single repeated symbol yields -0.0
    entropy.max(0.0)
}
