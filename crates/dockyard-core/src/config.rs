// Dock configuration: strip metrics, font metrics, default portions and
// behaviour flags. Stored as JSON in the platform config dir, e.g.
// ~/.config/dockyard/config.json on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DockError, Result};
use crate::Edge;

/// Fixed spacing constants of the auto-hide strip. These are configuration,
/// never recomputed per pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripMetrics {
    pub image_width: i32,
    pub image_height: i32,
    pub image_gap_top: i32,
    pub image_gap_left: i32,
    pub image_gap_right: i32,
    pub image_gap_bottom: i32,
    pub text_gap_left: i32,
    pub text_gap_right: i32,
    pub tab_gap_top: i32,
    pub tab_gap_left: i32,
    /// Space inserted between the tabs of two different panes.
    pub tab_gap_between: i32,
    /// Diameter of the rounded tab corners.
    pub curve_size: i32,
}

impl Default for StripMetrics {
    fn default() -> Self {
        Self {
            image_width: 16,
            image_height: 16,
            image_gap_top: 2,
            image_gap_left: 4,
            image_gap_right: 2,
            image_gap_bottom: 2,
            text_gap_left: 0,
            text_gap_right: 0,
            tab_gap_top: 3,
            tab_gap_left: 4,
            tab_gap_between: 10,
            curve_size: 6,
        }
    }
}

/// Opaque font token. Only the line height takes part in layout; the rest
/// is passed through to the text measurer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub line_height: i32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 9.0,
            line_height: 15,
        }
    }
}

/// Initial size requests for the four docked edges. Values below 1 are
/// fractions of the dock area, values of 1 or more are absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgePortions {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EdgePortions {
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

impl Default for EdgePortions {
    fn default() -> Self {
        Self {
            top: 0.25,
            bottom: 0.25,
            left: 0.25,
            right: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub metrics: StripMetrics,
    pub font: Font,
    pub portions: EdgePortions,
    /// Space always left for the document area between two docked windows.
    pub minimum_interior_size: i32,
    /// Thickness of the splitter between nested panes.
    pub splitter_size: i32,
    pub show_auto_hide_content_on_hover: bool,
    pub right_to_left: bool,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            metrics: StripMetrics::default(),
            font: Font::default(),
            portions: EdgePortions::default(),
            minimum_interior_size: 24,
            splitter_size: 4,
            show_auto_hide_content_on_hover: true,
            right_to_left: false,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("dockyard").join("config.json"))
}

/// Read a config file, reporting failures to the caller.
pub fn load_config_from(path: &Path) -> Result<DockConfig> {
    let data = std::fs::read_to_string(path).map_err(|source| DockError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

/// Load the user config, falling back to defaults when it is missing or broken.
pub fn load_config() -> DockConfig {
    let path = match config_path() {
        Some(p) => p,
        None => return DockConfig::default(),
    };
    if !path.exists() {
        return DockConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}", e);
            DockConfig::default()
        }
    }
}

pub fn save_config_to(config: &DockConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| DockError::ConfigIo {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| DockError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config(config: &DockConfig) {
    let path = match config_path() {
        Some(p) => p,
        None => {
            log::warn!("Cannot determine dock config path");
            return;
        }
    };
    if let Err(e) = save_config_to(config, &path) {
        log::error!("Failed to save dock config: {}", e);
    }
}
