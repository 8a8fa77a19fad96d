use core::sync::atomic::{AtomicBool, Ordering};

/// A cooperative cancellation check.
///
/// Long-running voxel computations poll an `Interrupt` at coarse-grained
/// points (once per z-slice of the distance transform). When
/// [`Interrupt::should_abort`] returns `true`, the computation stops and
/// reports an error; whatever it was building is dropped.
///
/// This is implemented for:
/// - [`NoInterrupt`], which never aborts.
/// - [`AtomicBool`], which aborts once the flag is set (possibly from another thread).
/// - Any `Fn() -> bool` closure.
pub trait Interrupt {
    /// Returns `true` if the current computation should stop as soon as possible.
    fn should_abort(&self) -> bool;
}

/// An [`Interrupt`] that never requests an abort.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoInterrupt;

impl Interrupt for NoInterrupt {
    #[inline]
    fn should_abort(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    #[inline]
    fn should_abort(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> bool> Interrupt for F {
    #[inline]
    fn should_abort(&self) -> bool {
        self()
    }
}
