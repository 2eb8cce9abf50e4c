//! The resolved style record handed to the layout engine.

use serde::Serialize;

use super::values::{Alignment, AutoLeading, Color, TextTransform, WordWrap};

/// A fully specified paragraph or heading style.
///
/// Records are plain values: every resolver call builds a fresh one and
/// nothing mutates it afterwards. Two records with equal fields are
/// interchangeable; `name` only exists so consumers can label or cache them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRecord {
    pub name: String,
    pub font_name: String,
    pub font_size: f32,
    pub leading: f32,
    pub auto_leading: AutoLeading,
    pub alignment: Alignment,
    pub left_indent: f32,
    pub right_indent: f32,
    pub first_line_indent: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub bullet_font_name: String,
    pub bullet_font_size: f32,
    pub bullet_indent: f32,
    pub text_color: Color,
    pub back_color: Option<Color>,
    /// Padding between text and background box; not included in the spacing.
    pub border_padding: f32,
    pub word_wrap: Option<WordWrap>,
    /// Whether the paragraph may reflow around floated figures.
    pub flowable: bool,
    pub text_transform: Option<TextTransform>,
    /// Ask the layout engine not to break the page right after this block.
    pub prevent_post_pagebreak: bool,
}

impl StyleRecord {
    /// Sets font size and leading together.
    pub(crate) fn with_metrics(mut self, font_size: f32, leading: f32) -> Self {
        self.font_size = font_size;
        self.leading = leading;
        self
    }

    /// Sets font size, leading and bullet font size together.
    pub(crate) fn with_body_metrics(self, font_size: f32, leading: f32) -> Self {
        let mut style = self.with_metrics(font_size, leading);
        style.bullet_font_size = font_size;
        style
    }

    /// Mirrors alignment and swaps left/right indentation.
    pub(crate) fn mirrored(mut self) -> Self {
        self.alignment = self.alignment.mirrored();
        std::mem::swap(&mut self.left_indent, &mut self.right_indent);
        self
    }
}
