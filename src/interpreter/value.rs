/// Runtime value kinds.
///
/// Defines `ValueKind`, the tag of a [`core::Value`], together with the fixed
/// table of readable kind names used in diagnostics. The names are the type
/// tags of properties files.
pub mod kind;

pub mod core;
