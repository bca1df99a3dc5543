//! The immediate-mode 2D drawing boundary.

use super::color::Color;

/// Immediate-mode 2D drawing context consumed by the widget.
///
/// This is the full surface the pad draws through: path construction, stroke
/// parameters, stroking, and rectangular clearing. Hosts supply an
/// implementation for whatever actually backs the surface; the bundled
/// [`CairoCanvas`](super::CairoCanvas) renders into a Cairo image surface.
///
/// Draw calls are fire-and-forget. Implementations that can fail internally
/// are expected to degrade silently (at most log) rather than report errors
/// back through this trait.
pub trait DrawContext {
    /// Starts a new path, discarding any current path state.
    fn begin_path(&mut self);

    /// Sets the stroke color for subsequent stroke calls.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the stroke width in pixels for subsequent stroke calls.
    fn set_stroke_width(&mut self, width: f64);

    /// Moves the current point without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight line from the current point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path with the current color and width.
    fn stroke(&mut self);

    /// Erases the given rectangle back to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
