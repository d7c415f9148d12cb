use crate::geometry::primitives::{Circle, Rect};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Rectangle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the bounding box of every item, as used for the overlap checks
    #[serde(default)]
    pub bboxes: bool,
    ///Number every item by its insertion index
    #[serde(default)]
    pub item_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            bboxes: false,
            item_labels: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub container_fill: Color,
    pub item_fill: Color,
    pub bbox_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        container_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        bbox_stroke: Color(0x2D, 0x2D, 0x2D),
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("invalid color: {s} ({e})"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Draws `circle` over the pixels it covers, i.e. centered on the middle of its center pixel.
pub fn circle(circle: &Circle, params: &[(&str, &str)]) -> svg::node::element::Circle {
    let mut element = svg::node::element::Circle::new()
        .set("cx", circle.center.0 as f64 + 0.5)
        .set("cy", circle.center.1 as f64 + 0.5)
        .set("r", circle.radius() as f64 + 0.5);
    for param in params {
        element = element.set(param.0, param.1)
    }
    element
}

/// Draws a rectangle covering all pixels of `rect`, its max edges included.
pub fn pixel_rect(rect: Rect, params: &[(&str, &str)]) -> Rectangle {
    let mut element = Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width() + 1)
        .set("height", rect.height() + 1);
    for param in params {
        element = element.set(param.0, param.1)
    }
    element
}
