/// The reloadable properties reader.
///
/// Owns the file path, its last seen modification time and the current
/// bindings. Reloads are all-or-nothing: a file that fails to load never
/// replaces the bindings already in place.
pub mod core;
/// "Did you mean" suggestions for misspelled property names.
pub mod suggest;
