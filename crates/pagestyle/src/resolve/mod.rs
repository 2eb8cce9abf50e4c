//! Style resolvers.
//!
//! - [`resolve_paragraph_style`]: body text, lists, captions, code blocks, ...
//! - [`resolve_heading_style`]: chapter, article and section headings
//!
//! Both are pure functions of their request and a frozen [`Config`](crate::Config).
//! Each is implemented as an ordered rule table folded over a fresh copy of
//! the matching base template.

mod cascade;
mod heading;
mod mode;
mod paragraph;

pub use heading::{
    resolve_heading, resolve_heading_style, section_metrics, HeadingRequest, MAX_SECTION_LEVEL,
};
pub use mode::{HeadingMode, TextMode};
pub use paragraph::{resolve_paragraph_style, ParagraphRequest};
