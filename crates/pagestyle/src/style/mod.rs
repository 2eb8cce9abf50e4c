//! Style records and their building blocks.
//!
//! - [`StyleRecord`]: the resolved, immutable style of one block
//! - [`paragraph_defaults`] / [`heading_defaults`]: the base templates
//! - [`Alignment`], [`WordWrap`], [`RelativeSize`], [`Color`] and friends:
//!   the value types stored in a record

mod defaults;
mod record;
mod values;

pub use defaults::{heading_defaults, paragraph_defaults};
pub use record::StyleRecord;
pub use values::{Alignment, AutoLeading, Color, RelativeSize, TextTransform, WordWrap};
