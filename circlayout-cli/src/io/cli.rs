use std::path::PathBuf;

use circlayout::layouts::LayoutType;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Arrange circles of RADIUS in the selected layout.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Container width in pixels
    pub width: i64,
    /// Container height in pixels
    pub height: i64,
    /// Number of items to add to the container
    pub num_items: usize,
    #[arg(short = 't', long, value_enum, default_value_t = LayoutVariant::HorizontalLine)]
    pub layout_type: LayoutVariant,
    /// Radius of the items in pixels [default: 10, or the value in the config file]
    #[arg(short, long)]
    pub radius: Option<i64>,
    /// Seed for the random layout [default: 0, or the value in the config file]
    #[arg(short, long)]
    pub seed: Option<u64>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER", default_value = ".")]
    pub output_folder: PathBuf,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutVariant {
    #[value(name = "horizontal-line", alias = "horizontal_line")]
    HorizontalLine,
    #[value(name = "grid")]
    Grid,
    #[value(name = "circle")]
    Circle,
    #[value(name = "random")]
    Random,
}

impl From<LayoutVariant> for LayoutType {
    fn from(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::HorizontalLine => LayoutType::HorizontalLine,
            LayoutVariant::Grid => LayoutType::Grid,
            LayoutVariant::Circle => LayoutType::Circle,
            LayoutVariant::Random => LayoutType::Random,
        }
    }
}
