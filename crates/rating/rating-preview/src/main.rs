// Desktop tooling crate: unwrap/expect are acceptable in its tests.
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod config;
mod framebuffer;

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use embedded_graphics::{pixelcolor::Gray4, prelude::*};
use rating_view::{BlockIcon, RatingView, ShapeStar, StarIcon};
use tracing_subscriber::EnvFilter;

use crate::config::{IconKind, Overrides, PreviewConfig};
use crate::framebuffer::Framebuffer;

/// Largest preview edge in pixels.
const MAX_PREVIEW_EDGE: u32 = 4096;

const BACKGROUND: Gray4 = Gray4::BLACK;
const EMPTY_COLOR: Gray4 = Gray4::new(0x5);
const FULL_COLOR: Gray4 = Gray4::WHITE;

#[derive(Parser)]
#[command(name = "rating-preview")]
#[command(about = "Lay out a star rating and print it as ASCII art or PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a PNG here instead of printing ASCII art
    #[arg(long)]
    png: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => PreviewConfig::load(path)?,
        None => PreviewConfig::default(),
    };
    let config = cli.overrides.apply(base);
    tracing::debug!(?config, "preview config");

    let framebuffer = match config.icon {
        IconKind::Star => {
            let icon = |color| ShapeStar::new(config.icon_size).color(color);
            render(&config, icon(EMPTY_COLOR), icon(FULL_COLOR))?
        }
        IconKind::Block => {
            let icon = |color| BlockIcon::new(Size::new(config.icon_size, config.icon_size), color);
            render(&config, icon(EMPTY_COLOR), icon(FULL_COLOR))?
        }
    };

    match &cli.png {
        Some(path) => {
            framebuffer.save_png(path)?;
            tracing::info!(path = %path.display(), "wrote preview");
        }
        None => print!("{}", framebuffer.to_ascii()),
    }

    Ok(())
}

/// Runs one layout pass and draws it into a fresh framebuffer.
fn render<E, F>(config: &PreviewConfig, empty: E, full: F) -> Result<Framebuffer>
where
    E: StarIcon,
    F: StarIcon,
{
    let mut view = RatingView::new()
        .empty_icon(empty)
        .full_icon(full)
        .config(config.layout)
        .rating(config.rating);

    if let Err(e) = view.layout_config().validate() {
        tracing::warn!(%e, "layout config rejected");
    }
    if let Err(e) = config.rating.validate() {
        tracing::warn!(%e, "rating rejected");
    }

    let size = view.measure(config.width_spec(), config.height_spec());
    ensure!(
        size.width <= MAX_PREVIEW_EDGE && size.height <= MAX_PREVIEW_EDGE,
        "preview size {}x{} exceeds {} px per edge",
        size.width,
        size.height,
        MAX_PREVIEW_EDGE
    );
    tracing::info!(
        width = size.width,
        height = size.height,
        stars_per_row = view.stars_per_row(),
        "measured"
    );

    let mut framebuffer = Framebuffer::new(size.width, size.height, BACKGROUND);
    view.render(&mut framebuffer, Point::zero())
        .context("Failed to draw rating")?;

    Ok(framebuffer)
}
