//! Responsive row heights for the views that host a justified grid.
//!
//! Each view picks its target row height from the viewport width: short rows
//! on phones so about three items fit side by side, taller rows on tablets
//! and desktops.

use crate::config::JustifyConfig;

/// Viewports narrower than this use the compact row height.
pub const COMPACT_MAX_WIDTH: f64 = 640.0;

/// Viewports narrower than this (and not compact) use the medium row height.
pub const MEDIUM_MAX_WIDTH: f64 = 1024.0;

/// Target row heights per viewport class.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowHeights {
    /// Below [`COMPACT_MAX_WIDTH`].
    pub compact: f64,
    /// Below [`MEDIUM_MAX_WIDTH`].
    pub medium: f64,
    /// Everything wider.
    pub wide: f64,
}

impl RowHeights {
    /// Target row height for a viewport of the given width.
    pub fn for_viewport(&self, viewport_width: f64) -> f64 {
        if viewport_width < COMPACT_MAX_WIDTH {
            self.compact
        } else if viewport_width < MEDIUM_MAX_WIDTH {
            self.medium
        } else {
            self.wide
        }
    }
}

/// Row heights and gap of one hosting view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewPreset {
    pub row_heights: RowHeights,
    pub gap: f64,
}

impl ViewPreset {
    /// Photography collections.
    pub const GALLERY: Self = Self {
        row_heights: RowHeights {
            compact: 160.0,
            medium: 300.0,
            wide: 400.0,
        },
        gap: 4.0,
    };

    /// Work-in-progress drafts. Shorter compact rows than the gallery.
    pub const PLAYGROUND: Self = Self {
        row_heights: RowHeights {
            compact: 115.0,
            medium: 300.0,
            wide: 400.0,
        },
        gap: 4.0,
    };

    /// Project cards. Capped at 440 so large screens don't get huge cards.
    pub const PROJECTS: Self = Self {
        row_heights: RowHeights {
            compact: 280.0,
            medium: 380.0,
            wide: 440.0,
        },
        gap: 8.0,
    };

    /// Look up a preset by name (`gallery`, `playground`, `projects`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            n if n.eq_ignore_ascii_case("gallery") => Some(Self::GALLERY),
            n if n.eq_ignore_ascii_case("playground") => Some(Self::PLAYGROUND),
            n if n.eq_ignore_ascii_case("projects") => Some(Self::PROJECTS),
            _ => None,
        }
    }

    /// Target row height for a viewport of the given width.
    pub fn row_height(&self, viewport_width: f64) -> f64 {
        self.row_heights.for_viewport(viewport_width)
    }

    /// Layout config for a viewport and the container inside it.
    pub fn config(&self, viewport_width: f64, container_width: f64) -> JustifyConfig {
        JustifyConfig::new(container_width, self.row_height(viewport_width)).gap(self.gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_exclusive_upper_bounds() {
        let h = ViewPreset::GALLERY.row_heights;
        assert_eq!(h.for_viewport(375.0), 160.0);
        assert_eq!(h.for_viewport(639.0), 160.0);
        assert_eq!(h.for_viewport(640.0), 300.0);
        assert_eq!(h.for_viewport(1023.0), 300.0);
        assert_eq!(h.for_viewport(1024.0), 400.0);
        assert_eq!(h.for_viewport(2560.0), 400.0);
    }

    #[test]
    fn presets_differ_where_views_differ() {
        assert_eq!(ViewPreset::PLAYGROUND.row_height(400.0), 115.0);
        assert_eq!(ViewPreset::PROJECTS.row_height(1920.0), 440.0);
        assert_eq!(ViewPreset::PROJECTS.gap, 8.0);
        assert_eq!(ViewPreset::GALLERY.gap, 4.0);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ViewPreset::by_name("Gallery"), Some(ViewPreset::GALLERY));
        assert_eq!(ViewPreset::by_name("projects"), Some(ViewPreset::PROJECTS));
        assert_eq!(ViewPreset::by_name("masonry"), None);
    }

    #[test]
    fn config_uses_viewport_for_height_and_container_for_width() {
        let c = ViewPreset::PROJECTS.config(800.0, 736.0);
        assert_eq!(c.container_width, 736.0);
        assert_eq!(c.target_row_height, 380.0);
        assert_eq!(c.gap, 8.0);
    }
}
