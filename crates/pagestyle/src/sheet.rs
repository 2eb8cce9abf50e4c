//! The frozen startup configuration together with its derived metrics.

use std::path::Path;

use crate::config::{
    overrides, ConfigError, Config, LayoutMetrics, Overrides, TableSpacing, CUSTOM_CONFIG_FILE,
};
use crate::resolve::{
    resolve_heading_style, resolve_paragraph_style, HeadingMode, ParagraphRequest,
};
use crate::style::{heading_defaults, paragraph_defaults, Alignment, StyleRecord};

/// Configuration and layout metrics assembled once at startup.
///
/// A `StyleSheet` is immutable: the override document is merged while it is
/// built and there is no way to merge another one afterwards. Share it by
/// reference (it is `Send + Sync`) and call the resolvers on it.
///
/// # Example
///
/// ```rust
/// use pagestyle::{Alignment, ParagraphRequest, StyleSheet};
///
/// let sheet = StyleSheet::default();
/// let style = sheet.paragraph_style(&ParagraphRequest::new("source"));
/// assert_eq!(style.font_name, "FreeMono");
/// assert_eq!(style.alignment, Alignment::Left);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    config: Config,
    metrics: LayoutMetrics,
    table_spacing: TableSpacing,
}

impl StyleSheet {
    /// Builds a sheet from an already assembled config.
    pub fn new(config: Config) -> Self {
        let metrics = LayoutMetrics::from_config(&config);
        Self {
            config,
            metrics,
            table_spacing: TableSpacing::default(),
        }
    }

    /// Builds a sheet from the defaults patched with `overrides`.
    pub fn with_overrides(overrides: Overrides) -> Result<Self, ConfigError> {
        Ok(Self::new(Config::default().merge(overrides)?))
    }

    /// Builds a sheet from the defaults and `dir/customconfig.yaml`, if present.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::load_from(&dir.join(CUSTOM_CONFIG_FILE))
    }

    /// Builds a sheet from the defaults and the override file at `path`, if present.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match overrides::load(path)? {
            Some(overrides) => Self::with_overrides(overrides),
            None => Ok(Self::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn table_spacing(&self) -> TableSpacing {
        self.table_spacing
    }

    /// A fresh copy of the paragraph base template.
    pub fn paragraph_defaults(&self) -> StyleRecord {
        paragraph_defaults(&self.config)
    }

    /// A fresh copy of the heading base template.
    pub fn heading_defaults(&self) -> StyleRecord {
        heading_defaults(&self.config)
    }

    pub fn paragraph_style(&self, request: &ParagraphRequest) -> StyleRecord {
        resolve_paragraph_style(&self.config, request)
    }

    pub fn heading_style(
        &self,
        mode: impl Into<HeadingMode>,
        level: i32,
        text_align: Option<Alignment>,
    ) -> StyleRecord {
        resolve_heading_style(&self.config, mode, level, text_align)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::WordWrap;

    #[test]
    fn test_sheet_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleSheet>();
        assert_send_sync::<StyleRecord>();
    }

    #[test]
    fn test_overrides_feed_metrics() {
        let sheet = StyleSheet::with_overrides(
            Overrides::new()
                .set("page_width", 600.0)
                .set("page_margin_left", 100.0)
                .set("page_margin_right", 100.0),
        )
        .unwrap();
        assert_eq!(sheet.metrics().print_width, 400.0);
    }

    #[test]
    fn test_overrides_feed_resolvers() {
        let sheet =
            StyleSheet::with_overrides(Overrides::new().set("word_wrap", "RTL")).unwrap();
        let style = sheet.paragraph_style(&ParagraphRequest::new("p"));
        assert_eq!(style.alignment, Alignment::Right);
        assert_eq!(style.word_wrap, Some(WordWrap::Rtl));

        let heading = sheet.heading_style("section", 2, None);
        assert_eq!(heading.alignment, Alignment::Right);
    }

    #[test]
    fn test_bad_override_fails_construction() {
        let err = StyleSheet::with_overrides(Overrides::new().set("no_such_thing", 1)).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { .. }));
    }

    #[test]
    fn test_defaults_are_fresh_copies() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.paragraph_defaults(), sheet.paragraph_defaults());
        assert_eq!(sheet.heading_defaults().space_before, 12.0);
    }
}
