use std::fmt::{Display, Formatter};
use std::ops::Range;

use anyhow::{Context, Result, ensure};
use rand::Rng;
use serde::{Deserialize, Serialize};
use svg::node::element::Rectangle;

use tagcloud::geometry::primitives::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Empty space around the bounding box of the cloud
    #[serde(default = "default_border")]
    pub border: i32,
    ///Width of the outline of every tag
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    #[serde(default = "default_background")]
    pub background: Color,
    ///Outline every tag with a random color instead of `stroke_color`
    #[serde(default = "default_true")]
    pub random_stroke_colors: bool,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    ///Mark the center the cloud was laid out around
    #[serde(default)]
    pub draw_center: bool,
    ///Print the cloud statistics above the cloud
    #[serde(default = "default_true")]
    pub label: bool,
}

fn default_border() -> i32 {
    20
}

fn default_stroke_width() -> f32 {
    5.0
}

fn default_background() -> Color {
    Color(0x00, 0x00, 0x00)
}

fn default_stroke_color() -> Color {
    Color(0xFF, 0xC8, 0x79)
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            border: default_border(),
            stroke_width: default_stroke_width(),
            background: default_background(),
            random_stroke_colors: true,
            stroke_color: default_stroke_color(),
            draw_center: false,
            label: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub fn random(rng: &mut impl Rng) -> Color {
        let [r, g, b] = rng.random::<[u8; 3]>();
        Color(r, g, b)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(&s);
        ensure!(
            hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |range: Range<usize>| {
            u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid color: {s}"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

pub fn rect_to_svg(rect: &Rect, style: &[(&str, &str)]) -> Rectangle {
    let mut element = Rectangle::new()
        .set("x", rect.x_min())
        .set("y", rect.y_min())
        .set("width", rect.width())
        .set("height", rect.height());
    for (key, value) in style {
        element = element.set(*key, *value);
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::try_from("#CC824A".to_string()).unwrap();
        assert_eq!(c, Color(0xCC, 0x82, 0x4A));
        assert_eq!(c.to_string(), "#CC824A");
        assert_eq!(Color::try_from("ffc879".to_string()).unwrap(), Color(0xFF, 0xC8, 0x79));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for s in ["", "#12345", "#GGGGGG", "#1234567", "#12é45", "#+F+F+F"] {
            assert!(Color::try_from(s.to_string()).is_err(), "{s}");
        }
    }
}
