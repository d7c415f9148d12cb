#[cfg(test)]
mod tests {
    use circlayout::entities::Container;
    use circlayout::geometry::primitives::Rect;
    use circlayout::io::bitmap::{EMPTY, FILLED, arrangement_to_bitmap, fill_ellipse};
    use circlayout::io::export::export_arrangement;
    use circlayout::io::ext_repr::{ExtArrangement, ExtItem};
    use circlayout::io::svg::{SvgDrawOptions, arrangement_to_svg};
    use circlayout::layouts::LayoutType;
    use circlayout::util::assertions;
    use circlayout::{
        Arrangement, LayoutConfig, LayoutError, circle_layout, grid_layout, horizontal_line_layout,
        random_layout,
    };
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn config(radius: i64) -> LayoutConfig {
        LayoutConfig {
            item_radius: radius,
            prng_seed: Some(0),
        }
    }

    #[test_case(LayoutType::HorizontalLine, 5; "horizontal_line")]
    #[test_case(LayoutType::Grid, 4; "grid")]
    #[test_case(LayoutType::Circle, 6; "circle")]
    #[test_case(LayoutType::Random, 25; "random")]
    fn arrange_valid(layout_type: LayoutType, n_items: usize) {
        init_logger();
        let container = Container::try_new(200, 120).unwrap();
        let arrangement = layout_type
            .arrange(container, n_items, &config(5))
            .unwrap();

        assert_eq!(arrangement.layout_type, layout_type);
        assert_eq!(arrangement.items.len(), n_items);
        assert!(assertions::items_within_container(
            &arrangement.container,
            &arrangement.items
        ));
        assert!(assertions::items_disjoint(&arrangement.items));
        assert!(arrangement.as_tuples().iter().all(|&(_, _, r)| r == 5));
    }

    #[test_case(LayoutType::HorizontalLine)]
    #[test_case(LayoutType::Grid)]
    #[test_case(LayoutType::Circle)]
    fn arrange_is_deterministic(layout_type: LayoutType) {
        let container = Container::try_new(90, 90).unwrap();
        let a = layout_type.arrange(container, 3, &config(2)).unwrap();
        let b = layout_type.arrange(container, 3, &config(2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn arrange_random_same_seed() {
        let container = Container::try_new(90, 90).unwrap();
        let a = LayoutType::Random.arrange(container, 10, &config(2)).unwrap();
        let b = LayoutType::Random.arrange(container, 10, &config(2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn arrange_zero_items() {
        for layout_type in LayoutType::ALL {
            let container = Container::try_new(10, 10).unwrap();
            let arrangement = layout_type.arrange(container, 0, &config(1)).unwrap();
            assert!(arrangement.items.is_empty());
        }
    }

    #[test]
    fn facades() {
        init_logger();
        assert_eq!(
            horizontal_line_layout(6, 3, 2, &config(1)),
            Ok(vec![(1, 1, 1), (4, 1, 1)])
        );
        assert_eq!(
            grid_layout(7, 7, 4, &config(1)),
            Ok(vec![(2, 2, 1), (2, 5, 1), (5, 2, 1), (5, 5, 1)])
        );
        assert_eq!(
            circle_layout(20, 20, 4, &config(1)),
            Ok(vec![(10, 15, 1), (5, 10, 1), (10, 5, 1), (15, 10, 1)])
        );
        assert_eq!(random_layout(3, 3, 1, &config(1)), Ok(vec![(1, 1, 1)]));
    }

    #[test]
    fn facade_errors() {
        assert!(matches!(
            horizontal_line_layout(0, 3, 1, &config(1)),
            Err(LayoutError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            grid_layout(7, 7, 1, &config(0)),
            Err(LayoutError::InvalidDimension { name: "radius", .. })
        ));
        assert!(matches!(
            grid_layout(3, 3, 2, &config(1)),
            Err(LayoutError::CapacityExceeded { .. })
        ));
        assert!(matches!(
            random_layout(6, 6, 2, &config(2)),
            Err(LayoutError::PlacementExhausted { .. })
        ));
    }

    #[test]
    fn export_json() {
        let container = Container::try_new(6, 3).unwrap();
        let arrangement = LayoutType::HorizontalLine
            .arrange(container, 2, &config(1))
            .unwrap();
        let ext = export_arrangement(&arrangement);
        assert_eq!(
            ext.items,
            vec![
                ExtItem { x: 1, y: 1, radius: 1 },
                ExtItem { x: 4, y: 1, radius: 1 }
            ]
        );

        let json = serde_json::to_string(&ext).unwrap();
        assert!(json.contains("\"layout_type\":\"horizontal_line\""));
        let parsed: ExtArrangement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ext);
    }

    #[test]
    fn bitmap_fills_items() {
        let container = Container::try_new(6, 3).unwrap();
        let arrangement = LayoutType::HorizontalLine
            .arrange(container, 2, &config(1))
            .unwrap();
        let bitmap = arrangement_to_bitmap(&arrangement).unwrap();

        assert_eq!(bitmap.dimensions(), (6, 3));
        // both 3x3 boxes are fully covered, the column in between is not
        for y in 0..3 {
            for x in [0, 1, 2, 3, 4, 5] {
                assert_eq!(*bitmap.get_pixel(x, y), FILLED, "pixel ({x}, {y})");
            }
        }

        let container = Container::try_new(30, 30).unwrap();
        let arrangement = LayoutType::Circle.arrange(container, 1, &config(5)).unwrap();
        let bitmap = arrangement_to_bitmap(&arrangement).unwrap();
        let (x, y, _) = arrangement.as_tuples()[0];
        assert_eq!(*bitmap.get_pixel(x as u32, y as u32), FILLED);
        // corners of the bounding box lie outside of the ellipse
        assert_eq!(*bitmap.get_pixel((x - 5) as u32, (y - 5) as u32), EMPTY);
        assert_eq!(*bitmap.get_pixel(0, 0), EMPTY);
    }

    #[test]
    fn bitmap_rejects_oversized_container() {
        let arrangement = Arrangement {
            layout_type: LayoutType::Grid,
            container: Container::try_new(1 << 33, 10).unwrap(),
            items: vec![],
        };
        assert_eq!(
            arrangement_to_bitmap(&arrangement),
            Err(LayoutError::RasterTooLarge {
                width: 1 << 33,
                height: 10
            })
        );
    }

    #[test]
    fn ellipse_is_clipped_to_image() {
        let mut image = image::GrayImage::from_pixel(4, 4, EMPTY);
        fill_ellipse(&mut image, Rect::new(-2, -2, 2, 2));
        assert_eq!(*image.get_pixel(0, 0), FILLED);
        assert_eq!(*image.get_pixel(2, 2), FILLED);
        assert_eq!(*image.get_pixel(3, 3), EMPTY);

        let before = image.clone();
        fill_ellipse(&mut image, Rect::new(10, 10, 12, 12));
        assert_eq!(image, before);
    }

    #[test]
    fn huge_container_does_not_overflow() {
        assert_eq!(
            grid_layout(5_000_000_000, 5_000_000_000, 1, &config(10)),
            Ok(vec![(2_500_000_000, 2_500_000_000, 10)])
        );
    }

    #[test]
    fn svg_contains_every_item() {
        let container = Container::try_new(100, 100).unwrap();
        let arrangement: Arrangement = LayoutType::Grid.arrange(container, 4, &config(3)).unwrap();
        let options = SvgDrawOptions {
            bboxes: true,
            ..SvgDrawOptions::default()
        };
        let svg = arrangement_to_svg(&arrangement, options, "test").to_string();

        for i in 0..4 {
            assert!(svg.contains(&format!("item_{i}")));
        }
        assert!(svg.contains("layout: grid"));
        assert!(!svg.contains("collisions"));
    }
}
