//! In-memory Cairo-backed host implementation.

use anyhow::{Context, Result};
use log::debug;

use super::{Cursor, Host, HostError};
use crate::draw::{CairoCanvas, DrawContext};
use crate::util::Rect;

/// The single container an [`ImageHost`] exposes to the pad.
#[derive(Debug, Clone)]
struct Container {
    id: String,
    width: f64,
    origin: (f64, f64),
}

/// A mounted surface: its layout rect plus the Cairo buffer behind it.
struct MountedSurface {
    rect: Rect,
    canvas: CairoCanvas,
}

/// Off-screen host with one configurable container.
///
/// Stands in for a real document tree: the pad resolves its container here,
/// mounts its surface as the container's only child, and draws into a Cairo
/// image buffer. The replay binary renders through this host and exports the
/// buffer as PNG; integration tests assert on its pixels.
pub struct ImageHost {
    container: Option<Container>,
    surface: Option<MountedSurface>,
    cursor: Cursor,
}

impl ImageHost {
    /// Creates a host whose container has the given id and content width.
    pub fn new(container_id: impl Into<String>, width: f64) -> Self {
        Self::with_origin(container_id, width, (0.0, 0.0))
    }

    /// Creates a host whose container sits at a non-zero layout origin.
    ///
    /// Surfaces mount at the container origin, so pointer coordinates get
    /// translated by it; tests use this to exercise rect-relative math.
    pub fn with_origin(container_id: impl Into<String>, width: f64, origin: (f64, f64)) -> Self {
        Self {
            container: Some(Container {
                id: container_id.into(),
                width,
                origin,
            }),
            surface: None,
            cursor: Cursor::Default,
        }
    }

    /// Creates a host with no container at all, for degraded-path testing.
    pub fn detached() -> Self {
        Self {
            container: None,
            surface: None,
            cursor: Cursor::Default,
        }
    }

    /// Changes the container's content width, as a viewport resize would.
    pub fn set_container_width(&mut self, width: f64) {
        if let Some(container) = &mut self.container {
            container.width = width;
        }
    }

    /// Current cursor, as last set by the pad.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether a surface is currently mounted.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns true if any surface pixel is non-transparent.
    pub fn surface_has_ink(&mut self) -> bool {
        self.surface
            .as_mut()
            .map(|s| s.canvas.has_ink())
            .unwrap_or(false)
    }

    /// Writes the mounted surface as PNG to the given stream.
    pub fn write_png<W: std::io::Write>(&mut self, out: &mut W) -> Result<()> {
        let surface = self
            .surface
            .as_mut()
            .context("no drawing surface mounted")?;
        surface.canvas.write_png(out).context("PNG encode failed")
    }
}

impl Host for ImageHost {
    fn container_width(&self, container_id: &str) -> Option<f64> {
        self.container
            .as_ref()
            .filter(|c| c.id == container_id)
            .map(|c| c.width)
    }

    fn insert_surface(
        &mut self,
        container_id: &str,
        width: f64,
        height: f64,
    ) -> Result<(), HostError> {
        let container = self
            .container
            .as_ref()
            .filter(|c| c.id == container_id)
            .ok_or_else(|| HostError::ElementNotFound(container_id.to_string()))?;

        let canvas =
            CairoCanvas::new(width, height).map_err(|_| HostError::ContextUnavailable)?;
        let rect = Rect {
            x: container.origin.0,
            y: container.origin.1,
            width,
            height,
        };
        debug!(
            "Mounted {width:.0}x{height:.0} surface in '{}'",
            container.id
        );
        self.surface = Some(MountedSurface { rect, canvas });
        Ok(())
    }

    fn remove_surface(&mut self) -> bool {
        let removed = self.surface.take().is_some();
        if removed {
            debug!("Removed mounted surface");
        }
        removed
    }

    fn surface_rect(&self) -> Option<Rect> {
        self.surface.as_ref().map(|s| s.rect)
    }

    fn buffer_size(&self) -> Option<(f64, f64)> {
        self.surface
            .as_ref()
            .map(|s| (s.canvas.width(), s.canvas.height()))
    }

    fn set_buffer_size(&mut self, width: f64, height: f64) -> Result<(), HostError> {
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| HostError::ElementNotFound("drawing surface".into()))?;
        surface.canvas =
            CairoCanvas::new(width, height).map_err(|_| HostError::ContextUnavailable)?;
        Ok(())
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        self.surface
            .as_mut()
            .filter(|s| s.canvas.is_ready())
            .map(|s| &mut s.canvas as &mut dyn DrawContext)
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
