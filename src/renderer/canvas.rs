//! `Surface` backed by a browser `CanvasRenderingContext2d`

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, size: Vec2) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_wedge(
        &mut self,
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: &str,
    ) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            end as f64,
        )?;
        ctx.line_to(center.x as f64, center.y as f64);
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.close_path();
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.close_path();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Vec2,
        font_px: f32,
        color: &str,
    ) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_font(&format!("{}px Arial", font_px));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(color);
        ctx.fill_text(text, at.x as f64, at.y as f64)
    }
}
