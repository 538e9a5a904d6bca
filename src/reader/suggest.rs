/// Fraction of a candidate's length that must overlap the requested name
/// before the candidate is suggested. The product is truncated to a whole
/// number of characters.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Counts the positions where `a` and `b` hold the same character, over the
/// length of the shorter one.
///
/// # Example
/// ```
/// use hotprops::reader::suggest::overlap;
///
/// assert_eq!(overlap("z_near", "z_naer"), 4);
/// assert_eq!(overlap("fovy", "fovy_deg"), 4);
/// ```
#[must_use]
pub fn overlap(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}

/// Picks the existing name most likely meant by `name`.
///
/// The best-scoring candidate is returned only when its overlap is non-zero
/// and at least `floor(len * SUGGESTION_THRESHOLD)` characters, where `len` is
/// the candidate's own length (see [`SUGGESTION_THRESHOLD`]). Ties go to the
/// lexicographically smaller candidate.
///
/// # Example
/// ```
/// use hotprops::reader::suggest::best_match;
///
/// let names = ["z_near", "z_far", "fovy"];
/// // Overlap 4 of 6: floor(6 * 0.8) = 4 is enough.
/// assert_eq!(best_match("z_naer", names), Some("z_near"));
/// // Overlap 3 of 6 is not.
/// assert_eq!(best_match("z_nxxx", names), None);
/// assert_eq!(best_match("title", names), None);
/// ```
pub fn best_match<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        let score = overlap(candidate, name);
        let better = match best {
            None => score > 0,
            Some((key, best_score)) => score > best_score || (score == best_score && candidate < key),
        };
        if better {
            best = Some((candidate, score));
        }
    }

    let (key, score) = best?;
    (score >= required_overlap(key.chars().count())).then_some(key)
}

#[allow(clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss)]
fn required_overlap(len: usize) -> usize {
    (len as f64 * SUGGESTION_THRESHOLD) as usize
}
