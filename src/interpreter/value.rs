/// The runtime value type.
///
/// Defines `Value`, its printed form, the truthiness rule used by `idan` and
/// `kadai`, and the conversion from parsed literals.
pub mod core;
