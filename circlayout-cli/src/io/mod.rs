use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use circlayout::geometry::primitives::ItemTuple;
use image::{GrayImage, ImageFormat};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open json file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write json file: {}", path.display()))?;

    info!("[IO] json written to file://{}", display_path(path));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", display_path(path));
    Ok(())
}

pub fn write_bmp(image: &GrayImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Bmp)
        .with_context(|| format!("could not write bitmap file: {}", path.display()))?;
    info!("[IO] bitmap written to file://{}", display_path(path));
    Ok(())
}

/// Canonical form of `path` if it can be resolved, `path` as given otherwise.
pub fn display_path(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Formats the placed items as `[(x, y, r), ...]`
pub fn format_tuples(tuples: &[ItemTuple]) -> String {
    let body = tuples
        .iter()
        .map(|(x, y, r)| format!("({x}, {y}, {r})"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        // stdout is reserved for the placement result
        .chain(std::io::stderr())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
