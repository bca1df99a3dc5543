//! Freehand drawing pad widget driven by host pointer and key events.
//!
//! The widget owns a pen state machine and a mounted drawing surface; the
//! host environment supplies events and the 2D context through the traits in
//! [`host`], so any event source can drive it and tests can substitute
//! fakes. [`host::ImageHost`] is the bundled off-screen implementation used
//! by the replay binary.

pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod pad;
pub mod replay;
pub mod util;

pub use config::Config;
pub use host::{Host, HostEvent, ImageHost};
pub use pad::{PadOptions, StrokePad};
