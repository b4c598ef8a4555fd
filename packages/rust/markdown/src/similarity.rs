//! Ratcliff/Obershelp string similarity.
//!
//! The longest common substring is matched first, then the same search runs
//! recursively on the unmatched text to its left and right. The score is
//! `2 * matched / (len(a) + len(b))`, counted in characters.

/// Case-insensitive similarity of `a` and `b` in `0.0..=1.0`.
///
/// Two empty strings are identical and score `1.0`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Among equally long runs the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    let width = bhi - blo + 1;
    // run[j - blo + 1] = length of the common run ending at a[i - 1], b[j]
    let mut prev = vec![0usize; width];
    let mut run = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            run[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };
            if run[col] > best_len {
                best_len = run[col];
                best_i = i + 1 - best_len;
                best_j = j + 1 - best_len;
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }

    (best_i, best_j, best_len)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(ratio("Examples", "examples"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("", "examples"), 0.0);
    }

    #[test]
    fn prefix_match() {
        // 2 * 7 / (7 + 13)
        assert!(approx(ratio("weather", "weather skill"), 0.7));
    }

    #[test]
    fn recursion_counts_blocks_on_both_sides() {
        // "er" then "i" to the right of it: 2 * 3 / (8 + 13)
        assert!(approx(ratio("overview", "weather skill"), 6.0 / 21.0));
    }

    #[test]
    fn synonyms_score_low() {
        // only one shared character lines up
        assert!(approx(ratio("usage", "examples"), 2.0 / 13.0));
        assert!(approx(ratio("author", "examples"), 2.0 / 14.0));
    }

    #[test]
    fn exact_half() {
        assert_eq!(ratio("examzzzz", "examples"), 0.5);
    }

    #[test]
    fn order_sensitive_alignment() {
        // "ab" vs "ba": only one block can align
        assert!(approx(ratio("ab", "ba"), 0.5));
    }
}
