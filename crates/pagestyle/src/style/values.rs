//! Value types carried by a [`StyleRecord`](super::StyleRecord).

use serde::{Deserialize, Deserializer, Serialize};

/// Horizontal alignment of a paragraph or heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Returns the alignment used when the text direction is right-to-left.
    ///
    /// | Input | Mirrored |
    /// |-------|----------|
    /// | `Left` | `Right` |
    /// | `Justify` | `Right` |
    /// | `Right` | `Left` |
    /// | `Center` | `Center` |
    pub fn mirrored(self) -> Self {
        match self {
            Alignment::Left | Alignment::Justify => Alignment::Right,
            Alignment::Right => Alignment::Left,
            Alignment::Center => Alignment::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line-breaking mode requested from the layout engine.
///
/// Absence of a mode (`None` in the config and in records) means ordinary
/// western word wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordWrap {
    /// Break anywhere between CJK glyphs.
    #[serde(rename = "CJK")]
    Cjk,
    /// Right-to-left text; also mirrors alignment and indentation.
    #[serde(rename = "RTL")]
    Rtl,
}

/// Coarse font size hint attached to a content node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeSize {
    Small,
    #[default]
    Normal,
    Big,
}

impl RelativeSize {
    pub fn as_str(self) -> &'static str {
        match self {
            RelativeSize::Small => "small",
            RelativeSize::Normal => "normal",
            RelativeSize::Big => "big",
        }
    }
}

/// How the layout engine should grow the leading when a line contains
/// content taller than the font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoLeading {
    Off,
    Min,
    #[default]
    Max,
}

/// Case transform applied to the text before layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

/// An opaque RGB color with channels in `0.0..=1.0`.
///
/// Deserializes from either a CSS color string (`"#eeeeee"`, `"black"`,
/// `"rgb(10, 20, 30)"`) or a `[r, g, b]` triple of floats. Serializes as the
/// triple so that a serialize/deserialize cycle is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f32; 3]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses any CSS color notation. Alpha is discarded.
    pub fn parse(s: &str) -> Result<Self, csscolorparser::ParseColorError> {
        let parsed = csscolorparser::parse(s)?;
        Ok(Self::rgb(parsed.r as f32, parsed.g as f32, parsed.b as f32))
    }

    /// Returns the color as 8-bit channels, rounding to nearest.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            Triple([f32; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => Color::parse(&s).map_err(serde::de::Error::custom),
            Repr::Triple([r, g, b]) => Ok(Color::rgb(r, g, b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_table() {
        assert_eq!(Alignment::Left.mirrored(), Alignment::Right);
        assert_eq!(Alignment::Justify.mirrored(), Alignment::Right);
        assert_eq!(Alignment::Right.mirrored(), Alignment::Left);
        assert_eq!(Alignment::Center.mirrored(), Alignment::Center);
    }

    #[test]
    fn test_color_from_hex() {
        let gray = Color::parse("#eeeeee").unwrap();
        assert_eq!(gray.to_rgb8(), (0xee, 0xee, 0xee));
        assert_eq!(gray.to_hex(), "#eeeeee");
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::parse("black").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_color_deserializes_from_string_or_triple() {
        let from_str: Color = serde_json::from_str(r##""#ff0000""##).unwrap();
        assert_eq!(from_str.to_rgb8(), (255, 0, 0));

        let from_triple: Color = serde_json::from_str("[0.75, 0.75, 0.75]").unwrap();
        assert_eq!(from_triple, Color::rgb(0.75, 0.75, 0.75));
    }

    #[test]
    fn test_color_rejects_garbage() {
        assert!(serde_json::from_str::<Color>(r#""not-a-color""#).is_err());
        assert!(serde_json::from_str::<Color>("[1.0, 2.0]").is_err());
    }

    #[test]
    fn test_word_wrap_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&WordWrap::Rtl).unwrap(), r#""RTL""#);
        let cjk: WordWrap = serde_json::from_str(r#""CJK""#).unwrap();
        assert_eq!(cjk, WordWrap::Cjk);
    }
}
