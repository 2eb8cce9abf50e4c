//! Base templates every resolved style starts from.

use super::record::StyleRecord;
use super::values::{Alignment, AutoLeading, Color};
use crate::config::Config;

/// Base record for body paragraphs.
pub fn paragraph_defaults(config: &Config) -> StyleRecord {
    StyleRecord {
        name: String::new(),
        font_name: config.serif_font.clone(),
        font_size: config.font_size,
        leading: config.leading,
        auto_leading: AutoLeading::Max,
        alignment: config.text_align,
        left_indent: 0.0,
        right_indent: 0.0,
        first_line_indent: 0.0,
        space_before: 3.0,
        space_after: 0.0,
        bullet_font_name: config.serif_font.clone(),
        bullet_font_size: config.font_size,
        bullet_indent: 0.0,
        text_color: Color::BLACK,
        back_color: None,
        border_padding: 0.0,
        word_wrap: None,
        flowable: false,
        text_transform: None,
        prevent_post_pagebreak: false,
    }
}

/// Base record for headings.
pub fn heading_defaults(config: &Config) -> StyleRecord {
    StyleRecord {
        font_size: config.big_font_size,
        leading: config.big_leading,
        alignment: Alignment::Left,
        space_before: 12.0,
        space_after: 6.0,
        bullet_font_size: config.big_font_size,
        ..paragraph_defaults(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_defaults_follow_body_text() {
        let config = Config::default();
        let style = paragraph_defaults(&config);
        assert_eq!(style.font_name, "FreeSerif");
        assert_eq!(style.bullet_font_name, "FreeSerif");
        assert_eq!(style.font_size, 10.0);
        assert_eq!(style.leading, 15.0);
        assert_eq!(style.alignment, Alignment::Justify);
        assert_eq!(style.space_before, 3.0);
        assert_eq!(style.space_after, 0.0);
        assert_eq!(style.text_color, Color::BLACK);
        assert_eq!(style.back_color, None);
        assert_eq!(style.word_wrap, None);
    }

    #[test]
    fn test_heading_defaults_use_big_tier() {
        let config = Config::default();
        let style = heading_defaults(&config);
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.leading, 17.0);
        assert_eq!(style.alignment, Alignment::Left);
        assert_eq!(style.space_before, 12.0);
        assert_eq!(style.space_after, 6.0);
        assert_eq!(style.back_color, None);
    }

    #[test]
    fn test_defaults_track_config() {
        let config = Config {
            serif_font: "DejaVuSerif".to_string(),
            font_size: 11.0,
            ..Config::default()
        };
        assert_eq!(paragraph_defaults(&config).font_name, "DejaVuSerif");
        assert_eq!(paragraph_defaults(&config).bullet_font_size, 11.0);
    }

    #[test]
    fn test_each_call_returns_an_independent_copy() {
        let config = Config::default();
        let mut first = paragraph_defaults(&config);
        first.font_size = 99.0;
        assert_eq!(paragraph_defaults(&config).font_size, 10.0);
    }
}
