// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders editorial infographic visuals to SVG (and an HTML gallery with `--all`).
mod config;
mod html;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use infoviz_charts::{
    ChartKind, MarkerStyle, RenderCache, VisualizationSpec, clamp_percent, parse_color_token,
};

use crate::config::EditorialConfig;

/// Render editorial infographic visuals to SVG.
#[derive(Parser, Debug)]
#[command(name = "infoviz_demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Chart kind: isotype, bar, line, pie
    #[arg(short, long)]
    kind: Option<String>,

    /// Primary value, 0-100 (out-of-range values are clamped)
    #[arg(short, long, allow_negative_numbers = true)]
    value: Option<i32>,

    /// Secondary value for bar charts, 0-100
    #[arg(short, long, allow_negative_numbers = true)]
    secondary: Option<i32>,

    /// Theme color name (gold, red, navy, emerald, black, chartreuse) or any CSS color
    #[arg(short, long)]
    color: Option<String>,

    /// Isotype marker style (circle, square, diamond, hexagon, triangle, smiley, ...)
    #[arg(short, long)]
    marker: Option<String>,

    /// Infographic title; also names the output files
    #[arg(short, long)]
    title: Option<String>,

    /// Heading above the isotype grid
    #[arg(long)]
    grid_title: Option<String>,

    /// Directory to write output files into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Render every chart kind and write an HTML gallery
    #[arg(long)]
    all: bool,
}

impl Args {
    fn to_config(&self) -> Result<EditorialConfig> {
        let mut config = EditorialConfig::default();
        if let Some(title) = &self.title {
            config.title.clone_from(title);
        }
        if let Some(grid_title) = &self.grid_title {
            config.grid_title.clone_from(grid_title);
        }

        let spec = &mut config.visualization;
        if let Some(kind) = &self.kind {
            spec.kind = ChartKind::from_name(kind);
            if spec.kind == ChartKind::Unrecognized {
                log::warn!("unknown chart kind `{kind}`, output will be empty");
            }
        }
        if let Some(marker) = &self.marker {
            spec.marker_style = MarkerStyle::from_name(marker);
            if spec.marker_style == MarkerStyle::Unrecognized {
                log::warn!("unknown marker style `{marker}`, using plain squares");
            }
        }
        if let Some(color) = &self.color {
            spec.color = parse_color_token(color).context("invalid --color")?;
        }
        if let Some(value) = self.value {
            spec.value = value;
        }
        if let Some(secondary) = self.secondary {
            spec.secondary_value = secondary;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = args.to_config()?;
    log::debug!("config: {config:?}");

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let mut cache = RenderCache::default();
    let stem = config.export_file_stem();

    if args.all {
        let mut sections = Vec::new();
        for kind in ChartKind::ALL {
            let spec = VisualizationSpec {
                kind,
                ..config.visualization
            };
            let svg = svg::to_svg_string(cache.render_spec(&spec));
            write_file(
                &args.out_dir.join(format!("{stem}_{}.svg", kind.name().to_uppercase())),
                &svg,
            )?;
            sections.push(html::HtmlSection {
                title: config.section_title(kind),
                description: describe(&spec),
                svg,
            });
        }
        let page = html::render_report(&config.title, &sections);
        write_file(&args.out_dir.join(format!("{stem}.html")), &page)?;
    } else {
        let svg = svg::to_svg_string(cache.render_spec(&config.visualization));
        write_file(&args.out_dir.join(format!("{stem}.svg")), &svg)?;
    }

    log::debug!(
        "render cache: {} hits, {} misses",
        cache.hits(),
        cache.misses()
    );
    Ok(())
}

fn describe(spec: &VisualizationSpec) -> String {
    match spec.kind {
        ChartKind::Isotype => format!(
            "{} {} markers in bands of ten.",
            clamp_percent(spec.value),
            spec.marker_style.name()
        ),
        ChartKind::Bar => format!(
            "Primary {}% against a comparison segment of {}%.",
            clamp_percent(spec.value),
            clamp_percent(spec.secondary_value)
        ),
        ChartKind::Line => format!(
            "Twelve-month trajectory ending at {}%.",
            clamp_percent(spec.value)
        ),
        ChartKind::Pie => format!("Saturation gauge at {}%.", clamp_percent(spec.value)),
        ChartKind::Unrecognized => String::new(),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
