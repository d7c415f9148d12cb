use crate::Arrangement;
use crate::geometry::geo_traits::Shape;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

pub fn arrangement_to_svg(arrangement: &Arrangement, options: SvgDrawOptions, title: &str) -> Document {
    let container = &arrangement.container;
    let (width, height) = (container.width() as f32, container.height() as f32);
    let min_dim = f32::min(width, height);

    // leave room around the container for the label
    let margin = 0.05 * min_dim;
    let vbox = (-margin, -margin, width + 2.0 * margin, height + 2.0 * margin);

    let theme = &options.theme;
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    let label = {
        let label_content = format!(
            "width: {} | height: {} | items: {} | layout: {} | {}",
            container.width(),
            container.height(),
            arrangement.items.len(),
            arrangement.layout_type,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * margin)
            .set("font-size", 0.5 * margin)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container_group = Group::new()
        .set("id", "container")
        .add(svg_util::pixel_rect(
            container.bbox(),
            &[
                ("fill", &*format!("{}", theme.container_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "container, width: {}, height: {}",
            container.width(),
            container.height()
        )));

    let items_group = {
        let mut items_group = Group::new().set("id", "items");
        for (i, item) in arrangement.items.iter().enumerate() {
            let (x, y, r) = item.as_tuple();
            let mut item_group = Group::new()
                .set("id", format!("item_{i}"))
                .add(svg_util::circle(
                    item,
                    &[
                        ("fill", &*format!("{}", theme.item_fill)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!("item #{i}, x: {x}, y: {y}, radius: {r}")));
            if options.bboxes {
                item_group = item_group.add(svg_util::pixel_rect(
                    item.bbox(),
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.bbox_stroke)),
                        ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                        (
                            "stroke-dasharray",
                            &*format!("{} {}", 1.0 * stroke_width, 2.0 * stroke_width),
                        ),
                    ],
                ));
            }
            if options.item_labels {
                item_group = item_group.add(
                    Text::new(format!("{i}"))
                        .set("x", x as f64 + 0.5)
                        .set("y", y as f64 + 0.5)
                        .set("font-size", r as f64)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            items_group = items_group.add(item_group);
        }
        items_group
    };

    Document::new()
        .set("viewBox", vbox)
        .add(container_group)
        .add(items_group)
        .add(label)
}
