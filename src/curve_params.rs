use std::fmt::{Display, Formatter};
use crate::error::LissajousError;

/// Constants shaping every frame of the animation.
///
/// x(t) = sin(x_freq_scale * angle), y(t) = sin(frame / frame_div * angle)
/// with angle = radians(t * angle_scaler).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    pub name: &'static str,
    pub frames: usize,
    pub samples: usize,
    // Degrees per sample. Large values make the curve look choppy without changing its shape.
    pub angle_scaler: f64,
    // Only affects x, so changes the shape.
    pub x_freq_scale: f64,
    // Only affects y. Smaller values let the shape progress further over the animation.
    pub frame_div: f64,
}

impl CurveParams {
    pub const MORPHING: CurveParams = CurveParams {
        name: "morphing",
        frames: 720,
        samples: 360,
        angle_scaler: 0.25,
        x_freq_scale: 32.0,
        frame_div: 45.0,
    };

    pub const RATIO: CurveParams = CurveParams {
        name: "ratio",
        frames: 720,
        samples: 360,
        angle_scaler: 1.0,
        x_freq_scale: 2.0,
        frame_div: 180.0,
    };

    pub fn validate(&self) -> Result<(), LissajousError> {
        if self.frames == 0 {
            return Err(LissajousError::NoFrames);
        }
        if self.samples < 2 {
            return Err(LissajousError::TooFewSamples(self.samples));
        }
        for (name, value) in [
            ("angle_scaler", self.angle_scaler),
            ("x_freq_scale", self.x_freq_scale),
            ("frame_div", self.frame_div),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(LissajousError::InvalidScale { name, value });
            }
        }
        Ok(())
    }

    /// Sweep covered by one frame, in degrees.
    pub fn sweep_degrees(&self) -> f64 {
        self.angle_scaler * (self.samples as f64)
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        CurveParams::MORPHING
    }
}

impl Display for CurveParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames: {} samples: {} sweep: {}° freq-X: {} frame-div: {}",
            self.name, self.frames, self.samples, self.sweep_degrees(), self.x_freq_scale, self.frame_div
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert_eq!(CurveParams::MORPHING.validate(), Ok(()));
        assert_eq!(CurveParams::RATIO.validate(), Ok(()));
    }

    #[test]
    fn default_is_morphing() {
        assert_eq!(CurveParams::default(), CurveParams::MORPHING);
    }

    #[test]
    fn rejects_zero_frames() {
        let params = CurveParams { frames: 0, ..CurveParams::MORPHING };
        assert_eq!(params.validate(), Err(LissajousError::NoFrames));
    }

    #[test]
    fn rejects_single_sample() {
        let params = CurveParams { samples: 1, ..CurveParams::MORPHING };
        assert_eq!(params.validate(), Err(LissajousError::TooFewSamples(1)));
    }

    #[test]
    fn rejects_zero_frame_div() {
        let params = CurveParams { frame_div: 0.0, ..CurveParams::MORPHING };
        assert_eq!(
            params.validate(),
            Err(LissajousError::InvalidScale { name: "frame_div", value: 0.0 })
        );
    }

    #[test]
    fn rejects_nan_scale() {
        let params = CurveParams { x_freq_scale: f64::NAN, ..CurveParams::MORPHING };
        assert!(matches!(
            params.validate(),
            Err(LissajousError::InvalidScale { name: "x_freq_scale", .. })
        ));
    }

    #[test]
    fn morphing_sweeps_ninety_degrees() {
        assert_eq!(CurveParams::MORPHING.sweep_degrees(), 90.0);
        assert_eq!(CurveParams::RATIO.sweep_degrees(), 360.0);
    }
}
