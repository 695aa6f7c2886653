//! Locale-style string ordering.
//!
//! Approximates a default English collation without pulling in ICU: compare
//! case-folded text first, then prefer lowercase at the first character that
//! differs only by case, then fall back to code-point order.

use std::cmp::Ordering;

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    y.is_lowercase().cmp(&x.is_lowercase())
                })
        })
        .then_with(|| a.cmp(b))
}
