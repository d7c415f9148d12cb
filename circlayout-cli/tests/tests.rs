#[cfg(test)]
mod tests {
    use circlayout::layouts::LayoutType;
    use circlayout::{Arrangement, LayoutConfig};
    use circlayout::entities::Container;
    use circlayout::io::export::export_arrangement;
    use circlayout_cli::config::CliConfig;
    use circlayout_cli::io::cli::{Cli, LayoutVariant};
    use circlayout_cli::io::{display_path, format_tuples};
    use circlayout_cli::io::output::LayoutOutput;
    use clap::Parser;
    use log::LevelFilter;
    use test_case::test_case;

    #[test_case(&[], "[]"; "empty")]
    #[test_case(&[(3, 1, 1)], "[(3, 1, 1)]"; "single")]
    #[test_case(&[(1, 1, 1), (4, 1, 1)], "[(1, 1, 1), (4, 1, 1)]"; "two")]
    fn tuples_are_formatted(tuples: &[(i64, i64, i64)], expected: &str) {
        assert_eq!(format_tuples(tuples), expected);
    }

    #[test_case(LayoutVariant::HorizontalLine, LayoutType::HorizontalLine)]
    #[test_case(LayoutVariant::Grid, LayoutType::Grid)]
    #[test_case(LayoutVariant::Circle, LayoutType::Circle)]
    #[test_case(LayoutVariant::Random, LayoutType::Random)]
    fn variant_maps_to_layout_type(variant: LayoutVariant, expected: LayoutType) {
        assert_eq!(LayoutType::from(variant), expected);
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["circlayout", "200", "100", "5"]).unwrap();
        assert_eq!((cli.width, cli.height, cli.num_items), (200, 100, 5));
        assert_eq!(cli.layout_type, LayoutVariant::HorizontalLine);
        assert_eq!(cli.radius, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.config_file, None);
        assert_eq!(cli.output_folder.to_str(), Some("."));
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test_case("horizontal-line", LayoutVariant::HorizontalLine)]
    #[test_case("grid", LayoutVariant::Grid)]
    #[test_case("circle", LayoutVariant::Circle)]
    #[test_case("random", LayoutVariant::Random)]
    fn cli_layout_type(name: &str, expected: LayoutVariant) {
        let cli = Cli::try_parse_from([
            "circlayout", "50", "50", "2", "--layout-type", name, "-r", "3", "-s", "7",
        ])
        .unwrap();
        assert_eq!(cli.layout_type, expected);
        assert_eq!(cli.radius, Some(3));
        assert_eq!(cli.seed, Some(7));
    }

    #[test_case(&["circlayout", "50", "50"]; "missing item count")]
    #[test_case(&["circlayout", "50", "50", "2", "-t", "spiral"]; "unknown layout type")]
    #[test_case(&["circlayout", "fifty", "50", "2"]; "non numeric width")]
    fn cli_rejects_invalid_arguments(args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn unresolvable_path_is_displayed_as_given() {
        let path = std::path::Path::new("does/not/exist/plot.bmp");
        assert_eq!(display_path(path), "does/not/exist/plot.bmp");

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(std::path::Path::new(".")), cwd.display().to_string());
    }

    #[test]
    fn config_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.layout, LayoutConfig::default());
        assert!(config.write_bmp);
        assert!(!config.write_svg);
        assert!(!config.write_json);
    }

    #[test]
    fn partial_config_file() {
        let json = r#"{ "layout": { "item_radius": 4, "prng_seed": null }, "write_svg": true }"#;
        let config: CliConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.layout.item_radius, 4);
        assert_eq!(config.layout.prng_seed, None);
        assert!(config.write_bmp);
        assert!(config.write_svg);
        assert!(!config.write_json);
    }

    #[test]
    fn config_round_trip() {
        let config = CliConfig {
            write_json: true,
            ..CliConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn output_is_flattened() {
        let container = Container::try_new(6, 3).unwrap();
        let arrangement: Arrangement = LayoutType::HorizontalLine
            .arrange(container, 2, &LayoutConfig { item_radius: 1, prng_seed: None })
            .unwrap();
        let output = LayoutOutput {
            arrangement: export_arrangement(&arrangement),
            config: CliConfig::default(),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["container"]["width"], 6);
        assert_eq!(value["items"][1]["x"], 4);
        assert!(value.get("config").is_some());

        let parsed: LayoutOutput = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, output);
    }
}
