//! Semantic roles of content nodes.

/// Semantic role of a body-text block.
///
/// Parsed from the mode names used by the layout engine. Unknown names are
/// kept as [`TextMode::Other`] and match no mode-specific rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextMode {
    /// Ordinary paragraph (`"p"`).
    Paragraph,
    Blockquote,
    /// Centered paragraph.
    Center,
    Footer,
    /// Figure caption text.
    Figure,
    Preformatted,
    Source,
    List,
    License,
    LicenseList,
    Box,
    References,
    ArticleFoot,
    Attribution,
    ImgAttribution,
    BookTitle,
    BookSubtitle,
    TocGroup,
    TocChapter,
    TocArticle,
    Other(String),
}

impl TextMode {
    pub fn as_str(&self) -> &str {
        match self {
            TextMode::Paragraph => "p",
            TextMode::Blockquote => "blockquote",
            TextMode::Center => "center",
            TextMode::Footer => "footer",
            TextMode::Figure => "figure",
            TextMode::Preformatted => "preformatted",
            TextMode::Source => "source",
            TextMode::List => "list",
            TextMode::License => "license",
            TextMode::LicenseList => "licenselist",
            TextMode::Box => "box",
            TextMode::References => "references",
            TextMode::ArticleFoot => "articlefoot",
            TextMode::Attribution => "attribution",
            TextMode::ImgAttribution => "img_attribution",
            TextMode::BookTitle => "booktitle",
            TextMode::BookSubtitle => "booksubtitle",
            TextMode::TocGroup => "toc_group",
            TextMode::TocChapter => "toc_chapter",
            TextMode::TocArticle => "toc_article",
            TextMode::Other(name) => name,
        }
    }

    /// Fixed-width modes keep their own line breaking and never reflow.
    pub fn is_fixed_width(&self) -> bool {
        matches!(self, TextMode::Preformatted | TextMode::Source)
    }

    /// Modes indented by list units rather than paragraph units.
    pub fn is_list_like(&self) -> bool {
        matches!(self, TextMode::List | TextMode::References)
    }
}

impl From<&str> for TextMode {
    fn from(name: &str) -> Self {
        match name {
            "p" => TextMode::Paragraph,
            "blockquote" => TextMode::Blockquote,
            "center" => TextMode::Center,
            "footer" => TextMode::Footer,
            "figure" => TextMode::Figure,
            "preformatted" => TextMode::Preformatted,
            "source" => TextMode::Source,
            "list" => TextMode::List,
            "license" => TextMode::License,
            "licenselist" => TextMode::LicenseList,
            "box" => TextMode::Box,
            "references" => TextMode::References,
            "articlefoot" => TextMode::ArticleFoot,
            "attribution" => TextMode::Attribution,
            "img_attribution" => TextMode::ImgAttribution,
            "booktitle" => TextMode::BookTitle,
            "booksubtitle" => TextMode::BookSubtitle,
            "toc_group" => TextMode::TocGroup,
            "toc_chapter" => TextMode::TocChapter,
            "toc_article" => TextMode::TocArticle,
            other => TextMode::Other(other.to_string()),
        }
    }
}

impl From<String> for TextMode {
    fn from(name: String) -> Self {
        TextMode::from(name.as_str())
    }
}

impl std::fmt::Display for TextMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeadingMode {
    Chapter,
    Article,
    /// Section heading; the only mode that uses the level.
    Section,
    TableCaption,
    License,
    Other(String),
}

impl HeadingMode {
    pub fn as_str(&self) -> &str {
        match self {
            HeadingMode::Chapter => "chapter",
            HeadingMode::Article => "article",
            HeadingMode::Section => "section",
            HeadingMode::TableCaption => "tablecaption",
            HeadingMode::License => "license",
            HeadingMode::Other(name) => name,
        }
    }
}

impl From<&str> for HeadingMode {
    fn from(name: &str) -> Self {
        match name {
            "chapter" => HeadingMode::Chapter,
            "article" => HeadingMode::Article,
            "section" => HeadingMode::Section,
            "tablecaption" => HeadingMode::TableCaption,
            "license" => HeadingMode::License,
            other => HeadingMode::Other(other.to_string()),
        }
    }
}

impl From<String> for HeadingMode {
    fn from(name: String) -> Self {
        HeadingMode::from(name.as_str())
    }
}

impl std::fmt::Display for HeadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_TEXT_MODES: &[&str] = &[
        "p",
        "blockquote",
        "center",
        "footer",
        "figure",
        "preformatted",
        "source",
        "list",
        "license",
        "licenselist",
        "box",
        "references",
        "articlefoot",
        "attribution",
        "img_attribution",
        "booktitle",
        "booksubtitle",
        "toc_group",
        "toc_chapter",
        "toc_article",
    ];

    #[test]
    fn test_known_text_modes_keep_their_names() {
        for name in KNOWN_TEXT_MODES {
            let mode = TextMode::from(*name);
            assert!(!matches!(mode, TextMode::Other(_)), "{name} should be known");
            assert_eq!(mode.as_str(), *name);
        }
    }

    #[test]
    fn test_long_paragraph_spelling_is_not_an_alias() {
        let mode = TextMode::from("paragraph");
        assert_eq!(mode, TextMode::Other("paragraph".to_string()));
        assert_eq!(mode.as_str(), "paragraph");
    }

    #[test]
    fn test_unknown_text_mode_is_preserved() {
        let mode = TextMode::from("sidebar");
        assert_eq!(mode, TextMode::Other("sidebar".to_string()));
        assert_eq!(mode.to_string(), "sidebar");
    }

    #[test]
    fn test_heading_modes_parse() {
        assert_eq!(HeadingMode::from("section"), HeadingMode::Section);
        assert_eq!(HeadingMode::from("tablecaption"), HeadingMode::TableCaption);
        assert_eq!(
            HeadingMode::from("part"),
            HeadingMode::Other("part".to_string())
        );
    }

    #[test]
    fn test_mode_groups() {
        assert!(TextMode::Source.is_fixed_width());
        assert!(!TextMode::Box.is_fixed_width());
        assert!(TextMode::References.is_list_like());
        assert!(!TextMode::LicenseList.is_list_like());
    }
}
