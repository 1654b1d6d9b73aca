//! Parsed query instructions and their resolution into a layout config.

use crate::breakpoint::ViewPreset;
use crate::config::{JustifyConfig, LayoutError};
use crate::last_row::LastRow;

/// Row height used when neither `row_height` nor `preset` is given.
pub const DEFAULT_ROW_HEIGHT: f64 = 300.0;

/// Parsed query instructions. Every field is optional; unset fields fall
/// back to the preset, then to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Container width (`w`, `width`).
    pub width: Option<f64>,
    /// Target row height (`h`, `row_height`, `height`).
    pub row_height: Option<f64>,
    /// Gap between items and rows (`gap`, `spacing`).
    pub gap: Option<f64>,
    /// Trailing-row policy (`last_row`).
    pub last_row: Option<LastRow>,
    /// Named view preset (`preset`, `view`).
    pub preset: Option<ViewPreset>,
    /// Viewport width used to pick a preset row height (`viewport`, `vw`).
    pub viewport: Option<f64>,
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve to a validated config.
    ///
    /// `container_width` is used when the query names no width; the viewport
    /// defaults to the resolved width. Explicit values win over the preset.
    pub fn to_config(&self, container_width: f64) -> Result<JustifyConfig, LayoutError> {
        let width = self.width.unwrap_or(container_width);
        let viewport = self.viewport.unwrap_or(width);
        let row_height = self
            .row_height
            .or_else(|| self.preset.map(|p| p.row_height(viewport)))
            .unwrap_or(DEFAULT_ROW_HEIGHT);
        let gap = self
            .gap
            .or_else(|| self.preset.map(|p| p.gap))
            .unwrap_or(0.0);

        let config = JustifyConfig::new(width, row_height)
            .gap(gap)
            .last_row(self.last_row.unwrap_or_default());
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uses_defaults() {
        let c = Instructions::new().to_config(960.0).unwrap();
        assert_eq!(c, JustifyConfig::new(960.0, DEFAULT_ROW_HEIGHT));
    }

    #[test]
    fn explicit_values_override_preset() {
        let inst = Instructions {
            row_height: Some(250.0),
            gap: Some(2.0),
            preset: Some(ViewPreset::PROJECTS),
            ..Instructions::default()
        };
        let c = inst.to_config(1200.0).unwrap();
        assert_eq!(c.target_row_height, 250.0);
        assert_eq!(c.gap, 2.0);
    }

    #[test]
    fn preset_uses_viewport_or_width() {
        let inst = Instructions {
            preset: Some(ViewPreset::GALLERY),
            ..Instructions::default()
        };
        assert_eq!(inst.to_config(500.0).unwrap().target_row_height, 160.0);
        assert_eq!(inst.to_config(1100.0).unwrap().target_row_height, 400.0);

        let inst = Instructions {
            viewport: Some(800.0),
            ..inst
        };
        assert_eq!(inst.to_config(1100.0).unwrap().target_row_height, 300.0);
    }

    #[test]
    fn width_in_query_wins() {
        let inst = Instructions {
            width: Some(640.0),
            ..Instructions::default()
        };
        assert_eq!(inst.to_config(1200.0).unwrap().container_width, 640.0);
    }

    #[test]
    fn invalid_resolution_is_rejected() {
        let inst = Instructions {
            row_height: Some(0.0),
            ..Instructions::default()
        };
        assert_eq!(inst.to_config(1200.0), Err(LayoutError::InvalidRowHeight(0.0)));
    }
}
