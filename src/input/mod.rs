//! Input handling and the pen state machine.
//!
//! This module tracks the drawing phase between host events: whether the
//! pointer is pressed and where the last surface-local point was. The widget
//! in [`crate::pad`] translates host events into transitions on these types.

pub mod pen;

// Re-export commonly used types at module level
pub use pen::{PenPhase, PenState};
