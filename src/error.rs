use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LissajousError {
    #[error("frame count must be at least 1")]
    NoFrames,

    #[error("a curve needs at least 2 samples per frame, got {0}")]
    TooFewSamples(usize),

    #[error("{name} must be finite and non-zero, got {value}")]
    InvalidScale { name: &'static str, value: f64 },

    #[error("viewport extents must be finite and positive, got {x} x {y}")]
    InvalidViewport { x: f64, y: f64 },

    #[error("cannot play back an empty frame buffer")]
    EmptyFrameBuffer,
}
