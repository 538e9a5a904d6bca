/// Returns the 1-based line number containing the byte `offset`.
///
/// Offsets past the end of `source` report the last line (plus one if the
/// source ends with a newline).
///
/// # Example
/// ```
/// use hotprops::util::source::line_of;
///
/// let source = "float a = 1.0f;\nfloat b = a;";
/// assert_eq!(line_of(source, 0), 1);
/// assert_eq!(line_of(source, 16), 2);
/// ```
#[must_use]
pub fn line_of(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Renders the source line holding `offset` with a `^` beneath that offset.
///
/// Tabs before the offset are kept in the padding so the caret lines up
/// with what an editor shows.
///
/// # Example
/// ```
/// use hotprops::util::source::pointer;
///
/// let source = "float x = = 1.0f;";
/// assert_eq!(pointer(source, 10), "float x = = 1.0f;\n          ^");
/// ```
#[must_use]
pub fn pointer(source: &str, offset: usize) -> String {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    let line = source[line_start..line_end].trim_end_matches('\r');

    let padding: String = source[line_start..offset].chars()
                                                    .map(|c| if c == '\t' { '\t' } else { ' ' })
                                                    .collect();

    format!("{line}\n{padding}^")
}
