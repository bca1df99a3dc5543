//! Host environment boundary.
//!
//! The pad never talks to a concrete windowing system or document tree.
//! Everything it needs from its surroundings is expressed by the [`Host`]
//! trait: container lookup, surface insertion/removal, layout geometry,
//! backing-buffer sizing, drawing-context access, and cursor updates. Tests
//! substitute a recording fake; [`ImageHost`] is the bundled off-screen
//! implementation.

pub mod events;
pub mod image;

// Re-export commonly used types at module level
pub use events::{HostEvent, Key};
pub use image::ImageHost;

use crate::draw::DrawContext;
use crate::util::Rect;
use thiserror::Error;

/// Errors that can occur while resolving host elements.
///
/// Both variants are recovered locally by the widget: the failing handler
/// resets the pen state and logs; nothing propagates to the dispatching host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The container or the drawing surface is missing from the host layout.
    #[error("element '{0}' not found in host layout")]
    ElementNotFound(String),

    /// A 2D drawing context could not be obtained for the surface.
    #[error("2D drawing context unavailable")]
    ContextUnavailable,
}

/// Pointer cursor shown while over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// The host's normal arrow cursor.
    #[default]
    Default,
    /// Crosshair cursor shown while a stroke is in progress.
    Crosshair,
}

/// Capabilities the pad consumes from its host environment.
///
/// At most one drawing surface exists per host at a time; `insert_surface`
/// callers are expected to remove any existing surface first (the pad's
/// rebuild path does). All geometry is in host layout coordinates.
pub trait Host {
    /// Content width of the named container, or `None` when it is absent
    /// from the host layout.
    fn container_width(&self, container_id: &str) -> Option<f64>;

    /// Inserts a fresh surface of the given size as the container's first
    /// child. The backing buffer starts transparent.
    fn insert_surface(
        &mut self,
        container_id: &str,
        width: f64,
        height: f64,
    ) -> Result<(), HostError>;

    /// Removes the active surface, discarding its pixels. Returns whether a
    /// surface was present.
    fn remove_surface(&mut self) -> bool;

    /// Layout rectangle of the active surface in host coordinates.
    fn surface_rect(&self) -> Option<Rect>;

    /// Pixel dimensions of the surface's backing buffer.
    fn buffer_size(&self) -> Option<(f64, f64)>;

    /// Resizes the backing buffer without touching layout. Existing pixel
    /// content is discarded, as when a canvas element's width attribute is
    /// assigned.
    fn set_buffer_size(&mut self, width: f64, height: f64) -> Result<(), HostError>;

    /// Immediate-mode drawing context of the active surface.
    fn context(&mut self) -> Option<&mut dyn DrawContext>;

    /// Updates the pointer cursor shown over the surface.
    fn set_cursor(&mut self, cursor: Cursor);
}
