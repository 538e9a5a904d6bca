/// Source text helpers.
///
/// Maps byte offsets back to human-readable positions and renders the
/// caret-pointer diagnostics attached to parse errors.
pub mod source;
