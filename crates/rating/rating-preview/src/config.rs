//! Preview configuration: a JSON file, overridden by command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use rating_layout::{Edges, Gravity, LayoutConfig, MeasureSpec, RatingInput};
use serde::Deserialize;

/// Built-in icon set used for both layers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// Vector five-point star.
    #[default]
    Star,
    /// Solid square.
    Block,
}

/// Everything one preview run needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Geometry inputs. The icon size comes from `icon_size`.
    pub layout: LayoutConfig,
    /// Rating inputs.
    pub rating: RatingInput,
    /// Icon set.
    pub icon: IconKind,
    /// Icon edge length in pixels.
    pub icon_size: u32,
    /// Width offered to the view.
    pub width: u32,
    /// Height offered to the view; natural height when absent.
    pub height: Option<u32>,
    /// Treat `width`/`height` as exact sizes instead of upper bounds.
    pub exact: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            rating: RatingInput::default(),
            icon: IconKind::default(),
            icon_size: 16,
            width: 120,
            height: None,
            exact: false,
        }
    }
}

impl PreviewConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Host constraints for the width axis.
    pub fn width_spec(&self) -> MeasureSpec {
        if self.exact {
            MeasureSpec::exact(self.width)
        } else {
            MeasureSpec::at_most(self.width)
        }
    }

    /// Host constraints for the height axis.
    pub fn height_spec(&self) -> MeasureSpec {
        match (self.height, self.exact) {
            (None, _) => MeasureSpec::unconstrained(),
            (Some(height), true) => MeasureSpec::exact(height),
            (Some(height), false) => MeasureSpec::at_most(height),
        }
    }
}

/// Command-line overrides; `None` keeps the file (or default) value.
#[derive(Debug, Default, Clone, clap::Args)]
pub struct Overrides {
    /// Number of stars
    #[arg(long)]
    pub stars: Option<u32>,
    /// Rating value
    #[arg(long)]
    pub rating: Option<f32>,
    /// Rating that fills every star (0 = star count)
    #[arg(long)]
    pub max_rating: Option<f32>,
    /// Quantization step in stars
    #[arg(long)]
    pub step: Option<f32>,
    /// Icon set
    #[arg(long, value_enum)]
    pub icon: Option<IconKind>,
    /// Icon edge length in pixels
    #[arg(long)]
    pub icon_size: Option<u32>,
    /// Gap between stars on a row
    #[arg(long)]
    pub spacing: Option<u32>,
    /// Gap between rows
    #[arg(long)]
    pub row_spacing: Option<u32>,
    /// Padding on every side
    #[arg(long)]
    pub padding: Option<u32>,
    /// Gravity, e.g. "center" or "end|bottom"
    #[arg(long)]
    pub gravity: Option<Gravity>,
    /// Width offered to the view
    #[arg(long)]
    pub width: Option<u16>,
    /// Height offered to the view
    #[arg(long)]
    pub height: Option<u16>,
    /// Use width/height as exact sizes
    #[arg(long)]
    pub exact: bool,
}

impl Overrides {
    /// Applies every flag that was given.
    pub fn apply(&self, mut config: PreviewConfig) -> PreviewConfig {
        let layout = &mut config.layout;
        if let Some(stars) = self.stars {
            *layout = layout.star_count(stars);
        }
        if let Some(spacing) = self.spacing {
            layout.horizontal_spacing = spacing;
        }
        if let Some(row_spacing) = self.row_spacing {
            layout.vertical_spacing = row_spacing;
        }
        if let Some(padding) = self.padding {
            *layout = layout.padding(Edges::all(padding));
        }
        if let Some(gravity) = self.gravity {
            *layout = layout.gravity(gravity);
        }

        let rating = &mut config.rating;
        if let Some(value) = self.rating {
            rating.rating = value;
        }
        if let Some(max_rating) = self.max_rating {
            *rating = rating.max_rating(max_rating);
        }
        if let Some(step) = self.step {
            *rating = rating.step(step);
        }

        if let Some(icon) = self.icon {
            config.icon = icon;
        }
        if let Some(icon_size) = self.icon_size {
            config.icon_size = icon_size;
        }
        if let Some(width) = self.width {
            config.width = u32::from(width);
        }
        if let Some(height) = self.height {
            config.height = Some(u32::from(height));
        }
        config.exact |= self.exact;

        config
    }
}
