use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// Floating-point element type a [`Graph`](crate::Graph) can hold.
///
/// Strictly reserved for `f32` and `f64`. `Float` already provides `zero()`,
/// `one()`, `exp()`, `powf()` and `tanh()`, which is everything the
/// differentiation rules need.
pub trait MugradScalar: Float + NumAssignOps + Debug + Display + 'static {
    /// Converts an `f64` literal into this type.
    ///
    /// Every literal the engine uses (`-1`, `2`, finite-difference steps)
    /// is representable in both `f32` and `f64`.
    fn from_f64(value: f64) -> Self;

    /// Widens this value to `f64` for tolerance checks.
    fn as_f64(self) -> f64;
}

impl MugradScalar for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl MugradScalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn as_f64(self) -> f64 {
        self
    }
}
