//! Construction-time errors.
//!
//! Sampling never fails; degenerate geometry resolves to a color. Only the
//! canvas gradient constructors validate their arguments, following the
//! argument checks of the HTML canvas gradient factories.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PaintStyleError {
    #[error("gradient argument `{name}` is not finite ({value})")]
    NonFiniteArgument { name: &'static str, value: f64 },
    #[error("radial gradient radius `{name}` is negative ({value})")]
    NegativeRadius { name: &'static str, value: f64 },
}

pub type Result<T, E = PaintStyleError> = core::result::Result<T, E>;

/// Fail with [`PaintStyleError::NonFiniteArgument`] if `value` is NaN or infinite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PaintStyleError::NonFiniteArgument { name, value })
    }
}
