// The drawing primitives a particle field needs from whatever it renders to.
// The browser implementation lives in canvas.rs.

use crate::color::Color;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

/// One stop of a radial glow, `offset` in [0, 1] along the radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub alpha: f64,
}

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    /// Disc of `radius` filled with a radial gradient of `color` through `stops`.
    fn glow(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
        stops: &[GradientStop],
    ) -> Result<(), JsValue>;

    fn disc(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64)
        -> Result<(), JsValue>;

    fn line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), JsValue>;
}
