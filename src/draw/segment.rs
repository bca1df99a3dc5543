//! Stroke-segment rendering helpers.

use super::color::Color;
use super::context::DrawContext;

/// Strokes a single straight line segment between two recorded pen positions.
///
/// Each pointer-move event produces one independent begin-path/stroke cycle;
/// a full gesture renders as the concatenation of many short segments with
/// consistent color and width, never as one accumulated path.
///
/// # Arguments
/// * `ctx` - Drawing context to render to
/// * `color` - Stroke color
/// * `width` - Stroke width in pixels
/// * `x0`, `y0` - Segment start (the previous pen position)
/// * `x1`, `y1` - Segment end (the current pen position)
pub fn stroke_segment(
    ctx: &mut dyn DrawContext,
    color: Color,
    width: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) {
    ctx.begin_path();
    ctx.set_stroke_color(color);
    ctx.set_stroke_width(width);
    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
    ctx.stroke();
}

/// Erases the entire backing buffer of a surface.
pub fn clear_surface(ctx: &mut dyn DrawContext, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}
