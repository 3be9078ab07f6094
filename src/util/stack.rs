/// Runs `f`, first growing the stack if less than the red zone remains.
///
/// The parser recurses once per nested expression or block, and the
/// evaluator once per nested expression, block and call. Deep source or a
/// program near the call-depth limit needs far more stack than the main
/// thread or a test thread starts with.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available.
    const RED_ZONE: usize = 128 * 1024;

    /// Stack space to allocate when growing.
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
