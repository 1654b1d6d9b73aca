//! Row scaling: the uniform factor that makes a row span the container.

use crate::config::JustifyConfig;

/// Uniform scale applied to every item of a row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowScale {
    /// Factor relative to the target row height.
    pub scale: f64,
    /// Resulting row height, `target_row_height * scale`.
    pub height: f64,
}

impl RowScale {
    /// Items rendered at exactly the target row height.
    pub fn unscaled(config: &JustifyConfig) -> Self {
        Self {
            scale: 1.0,
            height: config.target_row_height,
        }
    }

    /// Width of an item with the given ratio in this row.
    pub fn item_width(&self, aspect_ratio: f64) -> f64 {
        aspect_ratio * self.height
    }
}

/// Scale a row of `count` items whose ratios sum to `ratio_sum` so that
/// `Σ width + gap * (count - 1) == container_width`.
///
/// A single item wider than the container shrinks below the target height;
/// that is the only way to keep it inside the container without cropping.
pub fn fill_width(ratio_sum: f64, count: usize, config: &JustifyConfig) -> RowScale {
    let gaps = config.gap * count.saturating_sub(1) as f64;
    let available = config.container_width - gaps;
    let scale = available / (config.target_row_height * ratio_sum);
    RowScale {
        scale,
        height: config.target_row_height * scale,
    }
}
