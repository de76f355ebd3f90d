// Drawing seam between the particle field and whatever it is painted on.
// CanvasRenderer draws onto a 2d canvas context; tests substitute a recorder.

use crate::color::Color;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Renderer {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color, line_width: f64);
}

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2d context from the canvas. Returns None when the browser refuses one,
    // in which case the caller should leave the background blank.
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = match canvas.get_context("2d") {
            Ok(Some(object)) => object.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => {
                log::debug!("canvas has no 2d context");
                return None;
            }
            Err(err) => {
                log::debug!("getContext(\"2d\") failed: {:?}", err);
                return None;
            }
        };
        Some(CanvasRenderer { context })
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.begin_path();
        if let Err(err) = self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0) {
            log::debug!("arc rejected: {:?}", err);
            return;
        }
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color, line_width: f64) {
        self.context.begin_path();
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(line_width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}

#[cfg(test)]
pub mod recording {
    use super::Renderer;
    use crate::color::Color;
    use vecmath::Vector2;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Clear(f64, f64),
        Circle(Vector2<f64>, f64, Color),
        Line(Vector2<f64>, Vector2<f64>, Color, f64),
    }

    // Renderer that records every call instead of drawing.
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<Call>,
    }

    impl RecordingRenderer {
        pub fn circles(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Circle(..))).count()
        }

        pub fn lines(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Line(..))).count()
        }

        pub fn clears(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Clear(..))).count()
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, width: f64, height: f64) {
            self.calls.push(Call::Clear(width, height));
        }

        fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
            self.calls.push(Call::Circle(center, radius, color));
        }

        fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color, line_width: f64) {
            self.calls.push(Call::Line(from, to, color, line_width));
        }
    }
}
