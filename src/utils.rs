/// Maps `value` from [-extent, extent] to [0, upper].
pub fn normalize(value: f64, extent: f64, upper: f32) -> f32 {
    let norm = (value + extent) / (2.0 * extent);
    return (norm as f32) * upper;
}
