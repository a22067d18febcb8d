//! Stretches or compresses the canonical target sequence to a palette size.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// Picks `n` targets from `targets`, spreading evenly from first to last.
///
/// - `n == 1` takes the middle element
/// - `n == 2` takes the first and last elements
/// - otherwise slot `i` takes `round(i * (len - 1) / (n - 1))`, with repetition
///   when `n` exceeds the number of targets
///
/// # Examples
///
/// ```
/// use palettesmith::services::remap::remap_targets;
///
/// let targets = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(remap_targets(&targets, 1), vec!['c']);
/// assert_eq!(remap_targets(&targets, 2), vec!['a', 'e']);
/// assert_eq!(remap_targets(&targets, 3), vec!['a', 'c', 'e']);
/// ```
#[must_use]
pub fn remap_targets<T: Clone>(targets: &[T], n: usize) -> Vec<T> {
    if targets.is_empty() || n == 0 {
        return Vec::new();
    }

    let last = targets.len() - 1;
    match n {
        1 => vec![targets[targets.len() / 2].clone()],
        2 => vec![targets[0].clone(), targets[last].clone()],
        _ => (0..n)
            .map(|i| {
                let index = (i as f64 * last as f64 / (n - 1) as f64).round() as usize;
                targets[index.min(last)].clone()
            })
            .collect(),
    }
}
