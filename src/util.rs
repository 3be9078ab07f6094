/// Numeric helpers.
///
/// Integer-to-real widening, repetition counts, and the floored division and
/// modulo used by `/` and `%`. The integer helpers return `Option` so the
/// evaluator can map failure to the right runtime error.
pub mod num;

/// Stack growth for deep recursion.
///
/// Wraps `stacker` so that deeply nested expressions and recursive calls do
/// not overflow the host stack before the interpreter's own call-depth limit
/// applies.
pub mod stack;
