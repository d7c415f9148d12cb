use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use circlayout::entities::Container;
use circlayout::io::bitmap::arrangement_to_bitmap;
use circlayout::io::export::export_arrangement;
use circlayout::io::svg::arrangement_to_svg;
use circlayout::layouts::LayoutType;
use circlayout_cli::config::CliConfig;
use circlayout_cli::io;
use circlayout_cli::io::cli::Cli;
use circlayout_cli::io::output::LayoutOutput;
use clap::Parser as ClapParser;
use log::{info, warn};

const BMP_FILE_NAME: &str = "plot.bmp";
const SVG_FILE_NAME: &str = "plot.svg";
const JSON_FILE_NAME: &str = "plot.json";

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(radius) = args.radius {
        config.layout.item_radius = radius;
    }
    if let Some(seed) = args.seed {
        config.layout.prng_seed = Some(seed);
    }

    info!("[MAIN] Successfully parsed CliConfig: {config:?}");

    let layout_type = LayoutType::from(args.layout_type);
    let container = Container::try_new(args.width, args.height)?;
    let arrangement = layout_type
        .arrange(container, args.num_items, &config.layout)
        .with_context(|| format!("{layout_type} layout failed"))?;

    println!("{}", io::format_tuples(&arrangement.as_tuples()));

    let output_folder = args.output_folder.as_path();
    if !output_folder.exists() {
        fs::create_dir_all(output_folder).with_context(|| {
            format!("could not create output folder: {}", output_folder.display())
        })?;
    }

    if config.write_bmp {
        let bitmap = arrangement_to_bitmap(&arrangement)?;
        io::write_bmp(&bitmap, &output_folder.join(BMP_FILE_NAME))?;
    }

    if config.write_svg {
        let svg = arrangement_to_svg(&arrangement, config.svg_draw_options, "");
        io::write_svg(&svg, &output_folder.join(SVG_FILE_NAME))?;
    }

    if config.write_json {
        let output = LayoutOutput {
            arrangement: export_arrangement(&arrangement),
            config,
        };
        io::write_json(&output, &output_folder.join(JSON_FILE_NAME))?;
    }

    Ok(())
}
