//! The freehand drawing pad widget.
//!
//! [`StrokePad`] glues the pieces together: it owns the host capability, the
//! pen state machine, and the stroke parameters, and it translates host
//! events into surface lifecycle changes and draw calls. Every fallible
//! resolution (container, surface, context) is an explicit `Result`; the
//! failure arm resets the pen to idle and logs, so no error ever reaches the
//! host's dispatch loop.


use log::{debug, warn};

use crate::draw::{self, Color, color::CRIMSON};
use crate::host::{Cursor, Host, HostError, HostEvent, Key};
use crate::input::{PenPhase, PenState};

/// Element name used in errors when the mounted surface itself is missing.
const SURFACE_ELEMENT: &str = "drawing surface";

fn missing_surface() -> HostError {
    HostError::ElementNotFound(SURFACE_ELEMENT.to_string())
}

/// Stroke and surface parameters, normally filled from [`crate::config`].
///
/// The defaults reproduce the stock widget: crimson 2px strokes on a
/// 200px-tall surface mounted in `canvas-wrap`, cleared with the `c` key.
#[derive(Debug, Clone)]
pub struct PadOptions {
    /// Id of the container the surface mounts into.
    pub container_id: String,
    /// Stroke color for every segment.
    pub stroke_color: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Fixed surface height in pixels.
    pub surface_height: f64,
    /// Horizontal margin subtracted from the container content width.
    pub surface_margin: f64,
    /// Key that erases the surface, matched case-insensitively.
    pub clear_key: Key,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            container_id: "canvas-wrap".to_string(),
            stroke_color: CRIMSON,
            stroke_width: 2.0,
            surface_height: 200.0,
            surface_margin: 10.0,
            clear_key: Key::Char('c'),
        }
    }
}

/// Freehand drawing surface widget.
///
/// Attach it to a host, then feed it [`HostEvent`]s; the widget produces only
/// visual side effects on the host's surface. Handlers are expected to run
/// one at a time to completion (the host dispatch loop is single-threaded);
/// the pad performs no scheduling of its own.
pub struct StrokePad<H: Host> {
    host: H,
    pen: PenState,
    options: PadOptions,
}

impl<H: Host> StrokePad<H> {
    /// Constructs the widget and mounts its surface.
    ///
    /// Surface creation is best-effort: a missing container or context is
    /// logged and the widget still attaches, degrading to "draws nothing".
    /// On success the surface's backing buffer is synchronized once to its
    /// rendered layout rect, since a freshly mounted surface otherwise
    /// defaults to a dimension mismatch.
    pub fn attach(host: H, options: PadOptions) -> Self {
        let mut pad = Self {
            host,
            pen: PenState::new(),
            options,
        };
        match pad.rebuild_surface() {
            Ok(()) => {
                if let Err(err) = pad.sync_buffer_to_layout() {
                    warn!("Backing-buffer sync skipped: {err}");
                }
            }
            Err(err) => warn!("Surface creation failed: {err}"),
        }
        pad
    }

    /// Dispatches one host event into the widget.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            HostEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            HostEvent::PointerUp { .. } => self.on_pointer_up(),
            HostEvent::KeyDown(key) => self.on_key_down(key),
            HostEvent::Resized => self.on_resize(),
        }
    }

    /// Current pen state (read-only).
    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    /// Shared access to the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host, e.g. to adjust container layout before
    /// dispatching a `Resized` event.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the widget and returns the host with the drawn surface.
    pub fn into_host(self) -> H {
        self.host
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    fn on_pointer_down(&mut self, x: f64, y: f64) {
        if let Err(err) = self.begin_stroke(x, y) {
            self.pen.reset();
            warn!("Pointer press ignored: {err}");
        }
    }

    fn on_pointer_move(&mut self, x: f64, y: f64) {
        // Observed in every phase, but a no-op unless a stroke is active.
        if self.pen.phase() != PenPhase::Drawing {
            return;
        }
        if let Err(err) = self.extend_stroke(x, y) {
            self.pen.reset();
            warn!("Stroke segment dropped: {err}");
        }
    }

    fn on_pointer_up(&mut self) {
        if let Err(err) = self.end_stroke() {
            warn!("Pointer release degraded: {err}");
        }
        // Reset applies on both the success and the failure path.
        self.pen.reset();
    }

    fn on_key_down(&mut self, key: Key) {
        if !self.options.clear_key.matches(&key) {
            return;
        }
        if let Err(err) = self.clear_all() {
            self.pen.reset();
            warn!("Clear ignored: {err}");
        }
    }

    fn on_resize(&mut self) {
        if self.host.surface_rect().is_none() {
            return;
        }
        if let Err(err) = self.rebuild_surface() {
            self.pen.reset();
            warn!("Surface rebuild failed: {err}");
        }
    }

    // ------------------------------------------------------------------
    // Fallible operations; callers translate Err into a pen reset
    // ------------------------------------------------------------------

    fn begin_stroke(&mut self, x: f64, y: f64) -> Result<(), HostError> {
        let rect = self.host.surface_rect().ok_or_else(missing_surface)?;
        self.host
            .context()
            .ok_or(HostError::ContextUnavailable)?;
        let (sx, sy) = rect.to_local(x, y);
        self.pen.press(sx, sy);
        Ok(())
    }

    fn extend_stroke(&mut self, x: f64, y: f64) -> Result<(), HostError> {
        let rect = self.host.surface_rect().ok_or_else(missing_surface)?;
        self.host.set_cursor(Cursor::Crosshair);
        let (sx, sy) = rect.to_local(x, y);
        let (lx, ly) = self.pen.last();
        let ctx = self.host.context().ok_or(HostError::ContextUnavailable)?;
        draw::stroke_segment(
            ctx,
            self.options.stroke_color,
            self.options.stroke_width,
            lx,
            ly,
            sx,
            sy,
        );
        self.pen.advance(sx, sy);
        Ok(())
    }

    fn end_stroke(&mut self) -> Result<(), HostError> {
        self.host.surface_rect().ok_or_else(missing_surface)?;
        self.host
            .context()
            .ok_or(HostError::ContextUnavailable)?;
        self.host.set_cursor(Cursor::Default);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), HostError> {
        let (width, height) = self.host.buffer_size().ok_or_else(missing_surface)?;
        let ctx = self.host.context().ok_or(HostError::ContextUnavailable)?;
        draw::clear_surface(ctx, width, height);
        Ok(())
    }

    /// Destroys any existing surface and mounts a fresh one sized to the
    /// container's current content width. Never leaves two surfaces mounted.
    fn rebuild_surface(&mut self) -> Result<(), HostError> {
        let container_id = &self.options.container_id;
        let content_width = self
            .host
            .container_width(container_id)
            .ok_or_else(|| HostError::ElementNotFound(container_id.clone()))?;
        if self.host.remove_surface() {
            debug!("Replacing existing surface in '{container_id}'");
        }
        let width = (content_width - self.options.surface_margin).max(0.0);
        self.host
            .insert_surface(container_id, width, self.options.surface_height)
    }

    fn sync_buffer_to_layout(&mut self) -> Result<(), HostError> {
        let rect = self.host.surface_rect().ok_or_else(missing_surface)?;
        self.host
            .context()
            .ok_or(HostError::ContextUnavailable)?;
        self.host.set_buffer_size(rect.width, rect.height)
    }
}
