//! Layout quantities derived from the merged configuration.

use serde::Serialize;

use super::store::Config;
use crate::units::CM;

/// Fraction of the printable height that must remain before an article starts.
pub const ARTICLE_START_MIN_FRACTION: f32 = 0.5;
/// As above, for articles opening with an info box.
pub const ARTICLE_START_MIN_FRACTION_INFOBOX: f32 = 0.9;
/// Fraction of the printable height that must remain before a table starts.
pub const MIN_TABLE_FRACTION: f32 = 0.25;

/// Read-only page metrics for the layout engine.
///
/// Computed from the config *after* overrides have been merged, so a custom
/// page size or margin is reflected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    /// Page width minus left and right margins.
    pub print_width: f32,
    /// Page height minus top and bottom margins.
    pub print_height: f32,
    /// Insert a page break when less than this is left before an article.
    pub article_start_min_space: f32,
    pub article_start_min_space_infobox: f32,
    /// Insert a page break when less than this is left before a table.
    pub min_table_space: f32,
}

impl LayoutMetrics {
    pub fn from_config(config: &Config) -> Self {
        let print_width = config.page_width - config.page_margin_left - config.page_margin_right;
        let print_height = config.page_height - config.page_margin_top - config.page_margin_bottom;

        Self {
            print_width,
            print_height,
            article_start_min_space: ARTICLE_START_MIN_FRACTION * print_height,
            article_start_min_space_infobox: ARTICLE_START_MIN_FRACTION_INFOBOX * print_height,
            min_table_space: MIN_TABLE_FRACTION * print_height,
        }
    }
}

/// Vertical spacing around table flowables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableSpacing {
    pub space_before: f32,
    pub space_after: f32,
}

impl Default for TableSpacing {
    fn default() -> Self {
        Self {
            space_before: 0.25 * CM,
            space_after: 0.25 * CM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::A4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_default_print_area_is_a4_minus_two_cm_margins() {
        let metrics = LayoutMetrics::from_config(&Config::default());
        assert!(approx(metrics.print_width, A4.0 - 4.0 * CM));
        assert!(approx(metrics.print_height, A4.1 - 4.0 * CM));
    }

    #[test]
    fn test_thresholds_are_fractions_of_print_height() {
        let metrics = LayoutMetrics::from_config(&Config::default());
        assert!(approx(metrics.article_start_min_space, metrics.print_height / 2.0));
        assert!(approx(
            metrics.article_start_min_space_infobox,
            metrics.print_height * 0.9
        ));
        assert!(approx(metrics.min_table_space, metrics.print_height / 4.0));
    }

    #[test]
    fn test_margins_feed_print_width() {
        let config = Config {
            page_width: 600.0,
            page_margin_left: 50.0,
            page_margin_right: 30.0,
            ..Config::default()
        };
        assert!(approx(LayoutMetrics::from_config(&config).print_width, 520.0));
    }

    #[test]
    fn test_table_spacing_is_quarter_cm() {
        let spacing = TableSpacing::default();
        assert!(approx(spacing.space_before, 0.25 * CM));
        assert!(approx(spacing.space_after, 0.25 * CM));
    }
}
