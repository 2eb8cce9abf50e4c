//! # Pagestyle - paragraph and heading styles for paginated documents
//!
//! Pagestyle turns the context of a content node (its semantic role, list
//! depth, table nesting, a size hint and a requested alignment) into a fully
//! specified [`StyleRecord`] for a text layout engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagestyle::{Alignment, ParagraphRequest, StyleSheet};
//!
//! // Defaults only; use StyleSheet::load(dir) to merge customconfig.yaml.
//! let sheet = StyleSheet::default();
//!
//! let item = sheet.paragraph_style(&ParagraphRequest::new("list").indent(2));
//! assert_eq!(item.left_indent, 24.0);
//! assert_eq!(item.bullet_indent, 12.0);
//!
//! let heading = sheet.heading_style("section", 1, None);
//! assert_eq!(heading.font_size, 18.0);
//! assert!(heading.prevent_post_pagebreak);
//! ```
//!
//! ## Rule Order
//!
//! Styles are produced by folding a base template through an ordered table
//! of rules. Later rules overwrite earlier ones, so the order is part of the
//! contract:
//!
//! - Inside a table, only an explicit `right` or `center` request overrides
//!   the table alignment; `left` and `justify` do not.
//! - Mode rules (lists, code blocks, captions, ...) run after table rules.
//! - With `word_wrap: RTL`, alignment is mirrored and left/right indents are
//!   swapped once, after every mode and table rule.
//!
//! ## Configuration
//!
//! Every tunable is a named field of [`Config`]. A YAML (or JSON) document
//! named [`CUSTOM_CONFIG_FILE`] may replace any subset of them at startup:
//!
//! ```yaml
//! word_wrap: RTL
//! font_size: 11
//! box_background: "#f0f0f0"
//! ```
//!
//! A missing file is fine; any other problem with it is a [`ConfigError`].
//! [`LayoutMetrics`] (print area, page-break thresholds) are derived from
//! the merged config.

pub mod config;
pub mod resolve;
mod sheet;
pub mod style;
pub mod units;

pub use config::{Config, ConfigError, LayoutMetrics, Overrides, TableSpacing, CUSTOM_CONFIG_FILE};
pub use resolve::{
    resolve_heading, resolve_heading_style, resolve_paragraph_style, HeadingMode, HeadingRequest,
    ParagraphRequest, TextMode,
};
pub use sheet::StyleSheet;
pub use style::{
    heading_defaults, paragraph_defaults, Alignment, AutoLeading, Color, RelativeSize,
    StyleRecord, TextTransform, WordWrap,
};
