//! Cairo-backed canvas implementing the drawing-context boundary.

use cairo::{Context, Format, ImageSurface};
use log::warn;

use super::color::Color;
use super::context::DrawContext;

/// An off-screen Cairo image surface with its drawing context.
///
/// This is the pixel buffer behind [`ImageHost`](crate::host::ImageHost)
/// surfaces. The context is kept alive for the lifetime of the buffer and is
/// dropped/recreated only around exclusive pixel access, which Cairo requires
/// for reading image data.
pub struct CairoCanvas {
    surface: ImageSurface,
    ctx: Option<Context>,
}

impl CairoCanvas {
    /// Allocates a transparent ARGB buffer of the given pixel size.
    ///
    /// Fractional sizes are rounded up so the buffer never clips the layout
    /// rect it backs.
    pub fn new(width: f64, height: f64) -> Result<Self, cairo::Error> {
        let w = width.max(0.0).ceil() as i32;
        let h = height.max(0.0).ceil() as i32;
        let surface = ImageSurface::create(Format::ARgb32, w, h)?;
        let ctx = Context::new(&surface)?;
        Ok(Self {
            surface,
            ctx: Some(ctx),
        })
    }

    /// Pixel width of the backing buffer.
    pub fn width(&self) -> f64 {
        f64::from(self.surface.width())
    }

    /// Pixel height of the backing buffer.
    pub fn height(&self) -> f64 {
        f64::from(self.surface.height())
    }

    /// Whether a usable drawing context is attached.
    pub fn is_ready(&self) -> bool {
        self.ctx.is_some()
    }

    /// Returns true if any pixel in the buffer is non-transparent.
    ///
    /// Cairo hands out image data only while no context references the
    /// surface, so the context is dropped for the read and recreated after.
    pub fn has_ink(&mut self) -> bool {
        self.surface.flush();
        drop(self.ctx.take());
        let inked = self
            .surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false);
        self.ctx = Context::new(&self.surface)
            .map_err(|err| warn!("Failed to reattach canvas context: {err}"))
            .ok();
        inked
    }

    /// Writes the buffer as PNG to the given stream.
    pub fn write_png<W: std::io::Write>(&mut self, out: &mut W) -> Result<(), cairo::IoError> {
        self.surface.flush();
        self.surface.write_to_png(out)
    }
}

impl DrawContext for CairoCanvas {
    fn begin_path(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.new_path();
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if let Some(ctx) = &self.ctx {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        }
    }

    fn set_stroke_width(&mut self, width: f64) {
        if let Some(ctx) = &self.ctx {
            ctx.set_line_width(width);
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if let Some(ctx) = &self.ctx {
            ctx.move_to(x, y);
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if let Some(ctx) = &self.ctx {
            ctx.line_to(x, y);
        }
    }

    fn stroke(&mut self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.stroke(); // Ignore errors - a failed stroke just leaves the buffer as-is
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.save();
            ctx.set_operator(cairo::Operator::Clear);
            ctx.rectangle(x, y, width, height);
            let _ = ctx.fill();
            let _ = ctx.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::CRIMSON;
    use crate::draw::segment::stroke_segment;

    #[test]
    fn fresh_canvas_is_blank() {
        let mut canvas = CairoCanvas::new(32.0, 16.0).unwrap();
        assert!(canvas.is_ready());
        assert!(!canvas.has_ink());
        // Still usable after the exclusive pixel read.
        assert!(canvas.is_ready());
    }

    #[test]
    fn stroke_then_clear_round_trips_to_blank() {
        let mut canvas = CairoCanvas::new(32.0, 32.0).unwrap();
        stroke_segment(&mut canvas, CRIMSON, 2.0, 2.0, 2.0, 28.0, 28.0);
        assert!(canvas.has_ink());

        let (w, h) = (canvas.width(), canvas.height());
        canvas.clear_rect(0.0, 0.0, w, h);
        assert!(!canvas.has_ink());
    }

    #[test]
    fn fractional_sizes_round_up() {
        let canvas = CairoCanvas::new(10.4, 7.9).unwrap();
        assert_eq!(canvas.width(), 11.0);
        assert_eq!(canvas.height(), 8.0);
    }
}
