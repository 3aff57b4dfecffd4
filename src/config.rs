use std::ops::Range;

/// Parameters of the rising droplets drawn behind each column.
///
/// Provided as context by `App`; columns fall back to the defaults when
/// rendered outside of it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub droplets_per_column: usize,
    /// Diameter in px
    pub size: Range<f64>,
    /// Animation delay in seconds
    pub delay: Range<f64>,
    /// Animation duration in seconds
    pub duration: Range<f64>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            droplets_per_column: 5,
            size: 10.0..30.0,
            delay: 0.0..2.0,
            duration: 4.0..7.0,
        }
    }
}
