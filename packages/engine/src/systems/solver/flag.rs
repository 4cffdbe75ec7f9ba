use std::cell::Cell;
use std::rc::Rc;

/// Single-slot cancellation token shared between a solve run and its caller.
///
/// `true` while a run is active. The caller clears it to request a stop; the
/// run polls it before every step and clears it itself when it finishes, no
/// matter how. Single-threaded by construction (`Rc<Cell<_>>`): solver steps
/// interleave with input handling but never run in parallel with it.
#[derive(Debug, Clone, Default)]
pub struct SolveFlag(Rc<Cell<bool>>);

impl SolveFlag {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    /// Ask the active run (if any) to stop at its next step boundary.
    #[inline]
    pub fn cancel(&self) {
        self.0.set(false);
    }

    #[inline]
    pub(crate) fn begin(&self) {
        self.0.set(true);
    }

    #[inline]
    pub(crate) fn finish(&self) {
        self.0.set(false);
    }
}
