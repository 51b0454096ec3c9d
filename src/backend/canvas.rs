//! 2D canvas drawing surface inside the animation area.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::animation::FONT_FAMILY;
use crate::core::error::SurfaceError;
use crate::core::rain::{Extent, Surface};
use crate::utils::dom;

pub const AREA_ID: &str = "matrix-area";
pub const CANVAS_ID: &str = "matrix-canvas";

#[derive(Default)]
pub struct CanvasSurface {
    ctx: Option<CanvasRenderingContext2d>,
    extent: Option<Extent>,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn canvas() -> Result<HtmlCanvasElement, SurfaceError> {
        dom::document()
            .and_then(|doc| doc.get_element_by_id(CANVAS_ID))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or(SurfaceError::Unavailable)
    }
}

impl Surface for CanvasSurface {
    fn measure(&self) -> Result<Extent, SurfaceError> {
        let area = dom::element_by_id(AREA_ID).ok_or(SurfaceError::Unavailable)?;
        let rect = area.get_bounding_client_rect();
        Ok(Extent::new(rect.width(), rect.height()))
    }

    fn prepare(&mut self, extent: Extent) -> Result<(), SurfaceError> {
        let canvas = Self::canvas()?;
        let ratio = dom::device_pixel_ratio();
        canvas.set_width((extent.width * ratio).round() as u32);
        canvas.set_height((extent.height * ratio).round() as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::ContextUnavailable)?;
        // Resizing resets the context, so the transform is set, not scaled.
        ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
            .map_err(|_| SurfaceError::ContextUnavailable)?;

        self.ctx = Some(ctx);
        self.extent = Some(extent);
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(area) = dom::element_by_id(AREA_ID) {
            let _ = area.set_attribute("aria-hidden", if visible { "false" } else { "true" });
        }
    }

    fn clear(&mut self) {
        if let (Some(ctx), Some(extent)) = (&self.ctx, self.extent) {
            ctx.clear_rect(0.0, 0.0, extent.width, extent.height);
        }
    }

    fn fill_background(&mut self, color: &str) {
        if let (Some(ctx), Some(extent)) = (&self.ctx, self.extent) {
            ctx.set_fill_style_str(color);
            ctx.fill_rect(0.0, 0.0, extent.width, extent.height);
        }
    }

    fn set_font(&mut self, size: f64) {
        if let Some(ctx) = &self.ctx {
            ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
        }
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, fill: &str) {
        let mut buf = [0u8; 4];
        self.draw_text(glyph.encode_utf8(&mut buf), x, y, fill);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, fill: &str) {
        if let Some(ctx) = &self.ctx {
            ctx.set_fill_style_str(fill);
            let _ = ctx.fill_text(text, x, y);
        }
    }
}
