// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for a seat map, loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use parterre_focus::AxisBandPolicy;
use parterre_view::CullParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::DEFAULT_KEY_PREFIX;

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The contents are not valid TOML for [`SeatMapConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid config: `{field}` {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: &'static str,
        /// What the value must be.
        reason: &'static str,
    },
}

/// Seat-map configuration. Every field has a default; a file only needs to
/// name what it changes.
///
/// ```toml
/// max_selected = 4
///
/// [cull]
/// threshold = 500
///
/// [storage]
/// dir = "/var/lib/parterre"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatMapConfig {
    /// Most seats a user may hold at once.
    pub max_selected: usize,
    /// Viewport culling.
    pub cull: CullConfig,
    /// Keyboard navigation.
    pub focus: FocusConfig,
    /// Viewport event handling.
    pub viewport: ViewportConfig,
    /// Selection persistence.
    pub storage: StorageConfig,
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self {
            max_selected: parterre_selection::DEFAULT_LIMIT,
            cull: CullConfig::default(),
            focus: FocusConfig::default(),
            viewport: ViewportConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// `[cull]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CullConfig {
    /// Map units added around the visible rectangle.
    pub padding: f64,
    /// Seat circle radius, in map units.
    pub seat_radius: f64,
    /// Seat count at which culling starts.
    pub threshold: usize,
}

impl Default for CullConfig {
    fn default() -> Self {
        let p = CullParams::default();
        Self {
            padding: p.padding,
            seat_radius: p.item_radius,
            threshold: p.threshold,
        }
    }
}

/// `[focus]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Perpendicular band half-width for arrow navigation.
    pub tolerance: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            tolerance: parterre_focus::DEFAULT_TOLERANCE,
        }
    }
}

/// `[viewport]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Minimum interval between accepted scroll updates.
    pub scroll_throttle_ms: u64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 16,
        }
    }
}

/// `[storage]` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for saved selections; the platform data directory if unset.
    pub dir: Option<PathBuf>,
    /// Key prefix; the venue id is appended after a dash.
    pub prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            prefix: DEFAULT_KEY_PREFIX.to_owned(),
        }
    }
}

impl SeatMapConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is in range.
    ///
    /// The selection limit must be at least one; distances must be finite
    /// and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_selected == 0 {
            return Err(ConfigError::Invalid {
                field: "max_selected",
                reason: "must be at least 1",
            });
        }
        for (field, value) in [
            ("cull.padding", self.cull.padding),
            ("cull.seat_radius", self.cull.seat_radius),
            ("focus.tolerance", self.focus.tolerance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite, non-negative number",
                });
            }
        }
        Ok(())
    }

    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded seat map config");
        Ok(config)
    }

    /// Culling parameters for [`parterre_view`].
    #[must_use]
    pub fn cull_params(&self) -> CullParams {
        CullParams {
            padding: self.cull.padding,
            item_radius: self.cull.seat_radius,
            threshold: self.cull.threshold,
        }
    }

    /// Navigation policy for [`parterre_focus`].
    #[must_use]
    pub fn focus_policy(&self) -> AxisBandPolicy {
        AxisBandPolicy::new(self.focus.tolerance)
    }

    /// Scroll throttle interval.
    #[must_use]
    pub fn scroll_interval(&self) -> Duration {
        Duration::from_millis(self.viewport.scroll_throttle_ms)
    }
}
