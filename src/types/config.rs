use serde::{Deserialize, Serialize};

use crate::error::{HeaderError, Result};

/// Default minimum row height in pixels
pub const DEFAULT_MIN_ROW_HEIGHT: f32 = 20.0;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Default maximum row height in pixels
pub const DEFAULT_MAX_ROW_HEIGHT: f32 = 9999.0;

/// Validated row height bounds.
///
/// These only bound resize gestures; the current height of a row always comes
/// from the geometry oracle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowHeightBounds {
    min: f32,
    default: f32,
    max: f32,
}

impl RowHeightBounds {
    /// Validate `min <= default <= max`.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidHeightBounds`] for inverted or non-finite bounds.
    pub fn new(min: f32, default: f32, max: f32) -> Result<Self> {
        let finite = min.is_finite() && default.is_finite() && max.is_finite();
        if !finite || min < 0.0 || min > default || default > max {
            return Err(HeaderError::InvalidHeightBounds { min, default, max });
        }
        Ok(Self { min, default, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn default_height(&self) -> f32 {
        self.default
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Clamp a candidate size into `[min, max]`.
    pub fn clamp(&self, size: f32) -> f32 {
        size.clamp(self.min, self.max)
    }
}

impl Default for RowHeightBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ROW_HEIGHT,
            default: DEFAULT_ROW_HEIGHT,
            max: DEFAULT_MAX_ROW_HEIGHT,
        }
    }
}

/// Configuration for a row header, as supplied from JavaScript or the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowHeaderConfig {
    pub min_row_height: f32,
    pub default_row_height: f32,
    pub max_row_height: f32,
    /// Render cells in their loading state
    pub loading: bool,
    /// Rows may be dragged to reorder
    pub reorderable: bool,
    /// Rows may be resized via the handle
    pub resizable: bool,
}

impl Default for RowHeaderConfig {
    fn default() -> Self {
        Self {
            min_row_height: DEFAULT_MIN_ROW_HEIGHT,
            default_row_height: DEFAULT_ROW_HEIGHT,
            max_row_height: DEFAULT_MAX_ROW_HEIGHT,
            loading: false,
            reorderable: false,
            resizable: true,
        }
    }
}

impl RowHeaderConfig {
    /// Validated height bounds.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidHeightBounds`] when `min > max` or the
    /// default lies outside `[min, max]`.
    pub fn bounds(&self) -> Result<RowHeightBounds> {
        RowHeightBounds::new(
            self.min_row_height,
            self.default_row_height,
            self.max_row_height,
        )
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_bounds_are_valid() {
        let bounds = RowHeaderConfig::default().bounds().unwrap();
        assert_eq!(bounds, RowHeightBounds::default());
    }

    #[test_case(30.0, 20.0, 40.0 ; "default below min")]
    #[test_case(10.0, 50.0, 40.0 ; "default above max")]
    #[test_case(50.0, 45.0, 40.0 ; "min above max")]
    #[test_case(-1.0, 20.0, 40.0 ; "negative min")]
    #[test_case(10.0, f32::NAN, 40.0 ; "nan default")]
    fn rejects_invalid_bounds(min: f32, default: f32, max: f32) {
        let err = RowHeightBounds::new(min, default, max).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidHeightBounds { .. }));
    }

    #[test]
    fn clamp_respects_bounds() {
        let bounds = RowHeightBounds::new(10.0, 20.0, 40.0).unwrap();
        assert_eq!(bounds.clamp(5.0), 10.0);
        assert_eq!(bounds.clamp(25.0), 25.0);
        assert_eq!(bounds.clamp(400.0), 40.0);
    }

    #[test]
    fn config_deserializes_camel_case_with_defaults() {
        let config: RowHeaderConfig =
            serde_json::from_str(r#"{"minRowHeight": 12, "loading": true}"#).unwrap();
        assert_eq!(config.min_row_height, 12.0);
        assert_eq!(config.max_row_height, DEFAULT_MAX_ROW_HEIGHT);
        assert!(config.loading);
        assert!(config.resizable);
    }
}
