use circlayout::LayoutConfig;
use circlayout::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration of a command line run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CliConfig {
    /// Item radius and PRNG seed
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Write the arrangement as a monochrome bitmap
    #[serde(default = "default_true")]
    pub write_bmp: bool,
    /// Write the arrangement as an SVG
    #[serde(default)]
    pub write_svg: bool,
    /// Write the arrangement as JSON
    #[serde(default)]
    pub write_json: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_true() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            write_bmp: true,
            write_svg: false,
            write_json: false,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
