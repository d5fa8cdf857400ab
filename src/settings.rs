use std::time::Duration;
use ggez::glam::{DVec2, Vec2};
use ggez::graphics::Color;
use crate::curve_params::CurveParams;
use crate::error::LissajousError;
use crate::utils;

pub const ACTIVE_PRESET: CurveParams = CurveParams::MORPHING;

pub const WINDOW_TITLE: &str = "Lissajous";
pub const WINDOW_SIZE: Vec2 = Vec2::new(500.0, 500.0);

// Larger extents show more of the axis around the curve.
pub const X_MAX: f64 = 3.0;
pub const Y_MAX: f64 = 1.0;

pub const BACKGROUND_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
// #33FF44
pub const LINE_COLOR: Color = Color::new(0x33 as f32 / 255.0, 1.0, 0x44 as f32 / 255.0, 1.0);
pub const LINE_WIDTH: f32 = 1.0;

// Higher values slow the animation down.
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
pub const MAX_TICKS_PER_UPDATE: u32 = 4;

/// Fixed Cartesian window shown on screen, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x_max: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_max: f64, y_max: f64) -> Result<Viewport, LissajousError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(x_max) || !valid(y_max) {
            return Err(LissajousError::InvalidViewport { x: x_max, y: y_max });
        }
        Ok(Viewport { x_max, y_max })
    }

    pub fn x_limit(&self) -> (f64, f64) {
        (-self.x_max, self.x_max)
    }

    pub fn y_limit(&self) -> (f64, f64) {
        (-self.y_max, self.y_max)
    }

    /// Pixel position of `point` on a screen of `screen_size` pixels, y pointing up.
    pub fn to_screen(&self, point: DVec2, screen_size: Vec2) -> Vec2 {
        Vec2::new(
            utils::normalize(point.x, self.x_max, screen_size.x),
            screen_size.y - utils::normalize(point.y, self.y_max, screen_size.y),
        )
    }

    pub fn polyline(&self, points: &[DVec2], screen_size: Vec2) -> Vec<Vec2> {
        points.iter().map(|p| self.to_screen(*p, screen_size)).collect()
    }
}
