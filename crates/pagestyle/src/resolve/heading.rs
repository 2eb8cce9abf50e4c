//! Heading style resolution.

use super::cascade::{self, always, Rule};
use super::mode::HeadingMode;
use crate::config::Config;
use crate::style::{heading_defaults, Alignment, StyleRecord, WordWrap};

/// Deepest section level with its own metrics; deeper levels look like it.
pub const MAX_SECTION_LEVEL: i32 = 5;

/// Context of the heading whose style is requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadingRequest {
    pub mode: HeadingMode,
    /// Section depth, starting at 1. Ignored by other modes.
    pub level: i32,
    pub text_align: Option<Alignment>,
}

impl HeadingRequest {
    pub fn new(mode: impl Into<HeadingMode>, level: i32) -> Self {
        Self {
            mode: mode.into(),
            level,
            text_align: None,
        }
    }

    pub fn align(mut self, align: impl Into<Option<Alignment>>) -> Self {
        self.text_align = align.into();
        self
    }

    pub fn style_name(&self) -> String {
        format!("heading_style_{}_{}", self.mode, self.level)
    }

    /// The level clamped into `1..=MAX_SECTION_LEVEL`.
    pub fn section_level(&self) -> i32 {
        self.level.clamp(1, MAX_SECTION_LEVEL)
    }
}

/// Resolves the style of a heading.
///
/// ```rust
/// use pagestyle::{resolve_heading_style, Config};
///
/// let style = resolve_heading_style(&Config::default(), "section", 3, None);
/// assert_eq!(style.font_size, 14.0);
/// assert_eq!(style.leading, 16.0);
/// ```
pub fn resolve_heading_style(
    config: &Config,
    mode: impl Into<HeadingMode>,
    level: i32,
    text_align: Option<Alignment>,
) -> StyleRecord {
    let request = HeadingRequest::new(mode, level).align(text_align);
    resolve_heading(config, &request)
}

/// Same as [`resolve_heading_style`], from a prepared request.
pub fn resolve_heading(config: &Config, request: &HeadingRequest) -> StyleRecord {
    cascade::run(
        HEADING_RULES,
        config,
        request,
        heading_defaults(config),
        request.mode.as_str(),
    )
}

/// Section heading metrics `(font_size, leading, space_before)` for a
/// level already clamped into range.
pub fn section_metrics(level: i32) -> (f32, f32, f32) {
    let font_size = 18.0 - level.saturating_sub(1) as f32 * 2.0;
    let leading = font_size + (font_size / 5.0).trunc().clamp(2.0, 3.0);
    (font_size, leading, leading.min(20.0))
}

type HeadingRule = Rule<HeadingRequest, StyleRecord>;

pub(crate) static HEADING_RULES: &[HeadingRule] = &[
    Rule {
        name: "name",
        when: always,
        then: |_, r, mut s| {
            s.name = r.style_name();
            s
        },
    },
    Rule {
        name: "rtl",
        when: |c, _, _| c.word_wrap == Some(WordWrap::Rtl),
        then: set_rtl,
    },
    Rule {
        name: "chapter",
        when: |_, r, _| r.mode == HeadingMode::Chapter,
        then: |_, _, s| StyleRecord {
            alignment: Alignment::Center,
            ..s.with_metrics(26.0, 30.0)
        },
    },
    Rule {
        name: "article",
        when: |_, r, _| r.mode == HeadingMode::Article,
        then: |_, _, s| StyleRecord {
            space_before: 20.0,
            space_after: 2.0,
            ..s.with_metrics(22.0, 26.0)
        },
    },
    Rule {
        name: "section",
        when: |_, r, _| r.mode == HeadingMode::Section,
        then: set_section,
    },
    Rule {
        name: "table_caption",
        when: |_, r, _| r.mode == HeadingMode::TableCaption,
        then: |_, _, s| StyleRecord {
            alignment: Alignment::Center,
            flowable: false,
            space_after: 0.0,
            ..s.with_metrics(12.0, 16.0)
        },
    },
    Rule {
        name: "license",
        when: |_, r, _| r.mode == HeadingMode::License,
        then: |_, _, s| StyleRecord {
            space_before: 2.0,
            space_after: 0.0,
            ..s.with_metrics(7.0, 5.0)
        },
    },
    Rule {
        name: "explicit_align",
        when: |_, r, _| r.text_align.is_some(),
        then: |_, r, mut s| {
            if let Some(align) = r.text_align {
                s.alignment = align;
            }
            s
        },
    },
    Rule {
        name: "keep_with_next",
        when: always,
        then: |_, _, mut s| {
            s.prevent_post_pagebreak = true;
            s
        },
    },
];

fn set_rtl(_: &Config, request: &HeadingRequest, mut style: StyleRecord) -> StyleRecord {
    style.word_wrap = Some(WordWrap::Rtl);
    if request.text_align.is_none() {
        style.alignment = Alignment::Right;
    }
    style
}

fn set_section(_: &Config, request: &HeadingRequest, style: StyleRecord) -> StyleRecord {
    let level = request.section_level();
    let (font_size, leading, space_before) = section_metrics(level);
    let mut style = style.with_metrics(font_size, leading);
    style.space_before = space_before;
    // Subsections may wrap around floated figures.
    if level > 1 {
        style.flowable = true;
    }
    style
}
