use std::time::Instant;
use ggez::glam::DVec2;
use crate::curve_params::CurveParams;

/// Point `t` of frame `frame`. x only depends on `t`, y drifts with `frame`.
pub fn sample(params: &CurveParams, frame: usize, t: usize) -> DVec2 {
    let angle = (params.angle_scaler * (t as f64)).to_radians();
    DVec2::new(
        f64::sin(params.x_freq_scale * angle),
        f64::sin(((frame as f64) / params.frame_div) * angle),
    )
}

pub fn generate_frame(params: &CurveParams, frame: usize, out: &mut [DVec2]) {
    for (t, point) in out.iter_mut().enumerate() {
        *point = sample(params, frame, t);
    }
}

/// Every frame of the animation, computed up front and read-only afterwards.
///
/// Points are stored frame after frame, so `frame(f)` is a contiguous slice of
/// `samples_per_frame()` points.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    frames: usize,
    samples: usize,
    points: Vec<DVec2>,
}

impl FrameBuffer {
    pub fn generate(params: &CurveParams) -> Self {
        let start = Instant::now();
        let mut points = vec![DVec2::ZERO; params.frames * params.samples];

        if params.samples > 0 {
            for (frame, chunk) in points.chunks_exact_mut(params.samples).enumerate() {
                generate_frame(params, frame, chunk);
            }
        }

        log::debug!(
            "Generated {} x {} points in {}ms",
            params.frames, params.samples, start.elapsed().as_millis()
        );

        Self {
            frames: params.frames,
            samples: params.samples,
            points,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn samples_per_frame(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.frames == 0 || self.samples == 0
    }

    pub fn frame(&self, frame: usize) -> &[DVec2] {
        let start = frame * self.samples;
        &self.points[start..start + self.samples]
    }

    pub fn point(&self, frame: usize, t: usize) -> DVec2 {
        self.frame(frame)[t]
    }

    pub fn xs(&self, frame: usize) -> Vec<f64> {
        self.frame(frame).iter().map(|p| p.x).collect()
    }

    pub fn ys(&self, frame: usize) -> Vec<f64> {
        self.frame(frame).iter().map(|p| p.y).collect()
    }
}
