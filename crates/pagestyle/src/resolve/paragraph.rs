//! Paragraph style resolution.
//!
//! A paragraph style is the paragraph defaults folded through
//! [`PARAGRAPH_RULES`] in table order. The order is significant:
//!
//! - the table alignment (rule `table_align`) is only overridden by an
//!   explicit `right` or `center` request, never by `left` or `justify`;
//! - mode rules run after the table and explicit-alignment rules, so a
//!   list inside a table is still left aligned;
//! - right-to-left mirroring (`rtl_mirror`) runs after every mode and table
//!   rule, but before the license and table-of-contents metrics, which
//!   therefore see already mirrored indentation.

use super::cascade::{self, always, Rule};
use super::mode::TextMode;
use crate::config::Config;
use crate::style::{paragraph_defaults, Alignment, RelativeSize, StyleRecord, WordWrap};

/// Context of the block whose style is requested.
///
/// # Example
///
/// ```rust
/// use pagestyle::{Alignment, ParagraphRequest, RelativeSize};
///
/// let request = ParagraphRequest::new("preformatted")
///     .indent(1)
///     .table_nesting(2)
///     .size(RelativeSize::Small)
///     .align(Alignment::Right);
/// assert_eq!(request.indent_level, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParagraphRequest {
    pub mode: TextMode,
    /// Nesting depth of lists or indented paragraphs. Not validated.
    pub indent_level: i32,
    /// Depth of enclosing tables; 0 outside tables.
    pub table_nesting: u32,
    pub relative_size: RelativeSize,
    /// Requested alignment; `None` when the source did not ask for one.
    pub text_align: Option<Alignment>,
}

impl ParagraphRequest {
    pub fn new(mode: impl Into<TextMode>) -> Self {
        Self {
            mode: mode.into(),
            indent_level: 0,
            table_nesting: 0,
            relative_size: RelativeSize::Normal,
            text_align: None,
        }
    }

    pub fn indent(mut self, level: i32) -> Self {
        self.indent_level = level;
        self
    }

    pub fn table_nesting(mut self, depth: u32) -> Self {
        self.table_nesting = depth;
        self
    }

    pub fn size(mut self, size: RelativeSize) -> Self {
        self.relative_size = size;
        self
    }

    pub fn align(mut self, align: impl Into<Option<Alignment>>) -> Self {
        self.text_align = align.into();
        self
    }

    /// Diagnostic name of the resolved style.
    pub fn style_name(&self) -> String {
        format!(
            "text_style_{}_indent_{}_table_{}_size_{}",
            self.mode,
            self.indent_level,
            self.table_nesting,
            self.relative_size.as_str()
        )
    }

    fn in_table(&self) -> bool {
        self.table_nesting > 0
    }
}

/// Resolves the style of a body-text block.
///
/// Never fails: unknown modes fall through every mode rule and negative
/// indent levels are used as given.
pub fn resolve_paragraph_style(config: &Config, request: &ParagraphRequest) -> StyleRecord {
    if request.indent_level < 0 {
        log::warn!(
            "negative indent level {} for mode '{}'; indentation will be negative",
            request.indent_level,
            request.mode
        );
    }

    let seed = ParagraphState {
        style: paragraph_defaults(config),
        indent_level: request.indent_level,
    };
    cascade::run(
        PARAGRAPH_RULES,
        config,
        request,
        seed,
        request.mode.as_str(),
    )
    .style
}

/// State threaded through the paragraph cascade.
///
/// `indent_level` starts as the requested level; the blockquote rule bumps
/// it for the indentation rules that follow.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParagraphState {
    pub(crate) style: StyleRecord,
    pub(crate) indent_level: i32,
}

type ParagraphRule = Rule<ParagraphRequest, ParagraphState>;

pub(crate) static PARAGRAPH_RULES: &[ParagraphRule] = &[
    Rule {
        name: "name",
        when: always,
        then: set_name,
    },
    Rule {
        name: "flowable",
        when: always,
        then: set_flowable,
    },
    Rule {
        name: "word_wrap",
        when: wraps_specially,
        then: set_word_wrap,
    },
    Rule {
        name: "table_align",
        when: in_table,
        then: set_table_align,
    },
    Rule {
        name: "explicit_align",
        when: asks_right_or_center,
        then: set_explicit_align,
    },
    Rule {
        name: "small_text",
        when: uses_small_text,
        then: set_small_text,
    },
    Rule {
        name: "blockquote",
        when: |_, r, _| r.mode == TextMode::Blockquote,
        then: indent_blockquote,
    },
    Rule {
        name: "centered",
        when: |_, r, _| matches!(r.mode, TextMode::Footer | TextMode::Figure | TextMode::Center),
        then: |_, _, s| with_alignment(s, Alignment::Center),
    },
    Rule {
        name: "left_aligned",
        when: |_, r, _| {
            matches!(
                r.mode,
                TextMode::References
                    | TextMode::ArticleFoot
                    | TextMode::Source
                    | TextMode::Preformatted
                    | TextMode::List
                    | TextMode::Attribution
                    | TextMode::ImgAttribution
            )
        },
        then: |_, _, s| with_alignment(s, Alignment::Left),
    },
    Rule {
        name: "attribution",
        when: |_, r, _| matches!(r.mode, TextMode::Attribution | TextMode::ImgAttribution),
        then: set_attribution_metrics,
    },
    Rule {
        name: "img_attribution",
        when: |_, r, _| r.mode == TextMode::ImgAttribution,
        then: |_, _, mut s| {
            s.style.space_before = 2.0;
            s
        },
    },
    Rule {
        name: "footnote_text",
        when: |_, r, _| matches!(r.mode, TextMode::ArticleFoot | TextMode::References),
        then: |c, _, mut s| {
            s.style = s.style.with_body_metrics(c.small_font_size, c.small_leading);
            s
        },
    },
    Rule {
        name: "boxed",
        when: |_, r, _| matches!(r.mode, TextMode::Box | TextMode::Source | TextMode::Preformatted),
        then: set_boxed,
    },
    Rule {
        name: "monospace",
        when: |_, r, _| r.mode.is_fixed_width(),
        then: set_monospace,
    },
    Rule {
        name: "list_indent",
        when: |_, r, _| r.mode.is_list_like(),
        then: set_list_indent,
    },
    Rule {
        name: "paragraph_indent",
        when: |_, r, _| !r.mode.is_list_like(),
        then: set_paragraph_indent,
    },
    Rule {
        name: "book_title",
        when: |_, r, _| r.mode == TextMode::BookTitle,
        then: set_book_title,
    },
    Rule {
        name: "book_subtitle",
        when: |_, r, _| r.mode == TextMode::BookSubtitle,
        then: set_book_subtitle,
    },
    Rule {
        name: "rtl_mirror",
        when: |c, _, _| c.word_wrap == Some(WordWrap::Rtl),
        then: |_, _, mut s| {
            s.style = s.style.mirrored();
            s
        },
    },
    Rule {
        name: "license",
        when: |_, r, _| matches!(r.mode, TextMode::License | TextMode::LicenseList),
        then: set_license_metrics,
    },
    Rule {
        name: "license_list",
        when: |_, r, _| r.mode == TextMode::LicenseList,
        then: set_license_list_indent,
    },
    Rule {
        name: "toc",
        when: |_, r, _| {
            matches!(
                r.mode,
                TextMode::TocGroup | TextMode::TocChapter | TextMode::TocArticle
            )
        },
        then: set_toc_metrics,
    },
];

fn set_name(_: &Config, request: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style.name = request.style_name();
    s
}

fn set_flowable(_: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style.flowable = true;
    s
}

fn wraps_specially(config: &Config, request: &ParagraphRequest, _: &ParagraphState) -> bool {
    config.word_wrap.is_some() && !request.mode.is_fixed_width()
}

fn set_word_wrap(config: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style.word_wrap = config.word_wrap;
    s
}

fn in_table(_: &Config, request: &ParagraphRequest, _: &ParagraphState) -> bool {
    request.in_table()
}

fn set_table_align(config: &Config, _: &ParagraphRequest, s: ParagraphState) -> ParagraphState {
    with_alignment(s, config.table_text_align)
}

fn asks_right_or_center(_: &Config, request: &ParagraphRequest, _: &ParagraphState) -> bool {
    matches!(
        request.text_align.unwrap_or(Alignment::Left),
        Alignment::Right | Alignment::Center
    )
}

fn set_explicit_align(_: &Config, request: &ParagraphRequest, s: ParagraphState) -> ParagraphState {
    match request.text_align {
        Some(align) => with_alignment(s, align),
        None => s,
    }
}

fn uses_small_text(_: &Config, request: &ParagraphRequest, _: &ParagraphState) -> bool {
    request.in_table()
        || matches!(request.mode, TextMode::Footer | TextMode::Figure)
        || (request.mode == TextMode::Preformatted
            && request.relative_size == RelativeSize::Small)
}

fn set_small_text(
    config: &Config,
    request: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    s.style = s
        .style
        .with_body_metrics(config.small_font_size, config.small_leading);
    match request.relative_size {
        RelativeSize::Small => s.style.font_size -= 1.0,
        RelativeSize::Big => s.style.font_size += 1.0,
        RelativeSize::Normal => {}
    }
    s
}

fn indent_blockquote(
    config: &Config,
    _: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    s.style.right_indent += config.para_right_indent;
    s.indent_level = s.indent_level.saturating_add(1);
    s
}

fn with_alignment(mut s: ParagraphState, alignment: Alignment) -> ParagraphState {
    s.style.alignment = alignment;
    s
}

fn set_attribution_metrics(
    _: &Config,
    _: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    s.style = s.style.with_metrics(6.0, 8.0);
    s.style.space_before = 6.0;
    s
}

fn set_boxed(config: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style.back_color = Some(config.box_background);
    // Padding is not counted in the box size; the spacing below includes it.
    s.style.border_padding = config.box_border_padding;
    s.style.space_before = 6.0;
    s.style.space_after = 9.0;
    s
}

fn set_monospace(config: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style.font_name = config.mono_font.clone();
    s.style.flowable = false;
    s
}

fn list_indents(config: &Config, level: i32) -> (f32, f32) {
    let bullet = config.list_left_indent * level.saturating_sub(1).max(0) as f32;
    let left = config.list_left_indent * level as f32;
    (bullet, left)
}

fn set_list_indent(config: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    let (bullet, left) = list_indents(config, s.indent_level);
    s.style.space_before = 0.0;
    s.style.bullet_indent = bullet;
    s.style.left_indent = left;
    s
}

fn set_paragraph_indent(
    config: &Config,
    _: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    s.style.left_indent = s.indent_level as f32 * config.para_left_indent;
    s
}

fn set_book_title(config: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style = s.style.with_metrics(36.0, 40.0);
    s.style.space_before = 16.0;
    s.style.font_name = config.sans_font.clone();
    with_alignment(s, Alignment::Left)
}

fn set_book_subtitle(
    config: &Config,
    _: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    s.style = s.style.with_metrics(24.0, 30.0);
    s.style.font_name = config.sans_font.clone();
    with_alignment(s, Alignment::Left)
}

fn set_license_metrics(_: &Config, _: &ParagraphRequest, mut s: ParagraphState) -> ParagraphState {
    s.style = s.style.with_metrics(5.0, 1.0);
    s.style.space_before = 0.0;
    s
}

fn set_license_list_indent(
    config: &Config,
    _: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    let (bullet, left) = list_indents(config, s.indent_level);
    s.style.bullet_indent = bullet;
    s.style.left_indent = left;
    s.style.bullet_font_size = 5.0;
    s
}

fn set_toc_metrics(
    config: &Config,
    request: &ParagraphRequest,
    mut s: ParagraphState,
) -> ParagraphState {
    match request.mode {
        TextMode::TocGroup => s.style = s.style.with_metrics(18.0, 22.0),
        TextMode::TocChapter => s.style = s.style.with_metrics(14.0, 18.0),
        TextMode::TocArticle => {
            s.style = s.style.with_metrics(10.0, 12.0);
            s.style.left_indent = config.para_left_indent;
        }
        _ => {}
    }
    s
}
