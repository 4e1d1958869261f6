// Surface implementation on top of the browser's 2d canvas context

use crate::color::Color;
use crate::surface::{GradientStop, Surface};
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn glow(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        stops: &[GradientStop],
    ) -> Result<(), JsValue> {
        let [x, y] = center;
        let gradient = self.create_radial_gradient(x, y, 0.0, x, y, radius)?;
        for stop in stops {
            gradient.add_color_stop(stop.offset as f32, &color.css(stop.alpha))?;
        }

        self.begin_path();
        self.arc(x, y, radius, 0.0, 2.0 * PI)?;
        self.set_fill_style(&gradient);
        self.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn disc(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, 2.0 * PI)?;
        self.set_fill_style(&JsValue::from_str(&color.css(alpha)));
        self.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), JsValue> {
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.set_stroke_style(&JsValue::from_str(&color.css(alpha)));
        self.set_line_width(width);
        self.stroke();
        Ok(())
    }
}
