// Renderer struct that handles the 2d canvas calls for the particle field.
// Fill and stroke styles are only pushed to the context when they change,
// a frame draws dozens of circles and lines in the same two colors.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::error::{FieldError, Result};
use crate::surface::Surface;

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
    fill_style: Option<Color>,
    stroke_style: Option<Color>,
}

impl CanvasRenderer {
    // Grabs the 2d context from the canvas. A throwing getContext, a canvas
    // already bound to another context kind and a missing 2d context all
    // count as unavailable.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|err| {
                log::debug!("getContext(\"2d\") threw: {:?}", err);
                FieldError::ContextUnavailable
            })?
            .ok_or(FieldError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::ContextUnavailable)?;

        Ok(CanvasRenderer {
            canvas,
            context,
            fill_style: None,
            stroke_style: None,
        })
    }

    // Keeps the canvas out of the way of the page content above it
    pub fn apply_background_style(&self, opacity: f64) -> Result<()> {
        let style = self.canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("z-index", "-10")?;
        style.set_property("opacity", &opacity.to_string())?;
        Ok(())
    }

    #[allow(deprecated)]
    fn use_fill(&mut self, color: &Color) {
        if self.fill_style != Some(*color) {
            self.context
                .set_fill_style(&JsValue::from_str(&color.to_css()));
            self.fill_style = Some(*color);
        }
    }

    #[allow(deprecated)]
    fn use_stroke(&mut self, color: &Color) {
        if self.stroke_style != Some(*color) {
            self.context
                .set_stroke_style(&JsValue::from_str(&color.to_css()));
            self.stroke_style = Some(*color);
        }
    }
}

impl Surface for CanvasRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // Resizing a canvas resets its context state
        self.fill_style = None;
        self.stroke_style = None;
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &Color) {
        self.use_fill(color);
        self.context.begin_path();
        if self
            .context
            .arc(center[0], center[1], radius, 0.0, PI * 2.0)
            .is_err()
        {
            return;
        }
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &Color) {
        self.use_stroke(color);
        self.context.begin_path();
        self.context.set_line_width(width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
