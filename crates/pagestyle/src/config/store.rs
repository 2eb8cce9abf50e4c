//! The named configuration constants and their built-in defaults.

use serde::{Deserialize, Serialize};

use crate::style::{Alignment, Color, WordWrap};
use crate::units::{A4, CM};

/// The frozen set of named constants that drives style resolution.
///
/// Every field is a tunable of the rendering pipeline and can be replaced
/// individually by an override document keyed by the field name (see
/// [`Config::merge`]). Lengths are in points.
///
/// A `Config` is assembled once at startup and then only read; resolvers
/// take it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // Fonts
    pub serif_font: String,
    pub sans_font: String,
    pub mono_font: String,
    pub default_font: String,

    // Page geometry
    pub page_width: f32,
    pub page_height: f32,
    pub page_margin_left: f32,
    pub page_margin_right: f32,
    pub page_margin_top: f32,
    pub page_margin_bottom: f32,
    pub header_margin_hor: f32,
    pub header_margin_vert: f32,
    pub footer_margin_hor: f32,
    pub footer_margin_vert: f32,
    pub title_margin_left: f32,
    pub title_margin_right: f32,
    pub title_margin_top: f32,
    pub title_margin_bottom: f32,

    // Page furniture
    pub show_title_page: bool,
    pub show_title_page_footer: bool,
    pub show_page_header: bool,
    pub show_page_footer: bool,
    pub page_break_after_article: bool,
    pub show_article_attribution: bool,
    pub show_article_hr: bool,
    pub show_wiki_license: bool,
    /// Footer markup printed on every page.
    pub pagefooter: String,

    // Title page
    /// Path of an image shown on the title page; empty for none.
    pub title_page_image: String,
    /// Maximum `(width, height)` of the title image; aspect ratio is kept.
    pub title_page_image_size: (f32, f32),
    /// Position relative to the bottom-left corner. `None` centers on that axis.
    pub title_page_image_pos: (Option<f32>, Option<f32>),
    pub titlepagefooter: String,
    pub show_creation_date: bool,
    pub render_toc: bool,

    // Tables
    /// Maximum width overflow tolerated for tables.
    pub table_overflow_tolerance: f32,
    pub cell_padding: f32,
    /// Page breaks before tables are only forced above this many rows.
    pub min_rows_for_break: u32,
    pub table_widths_from_markup: bool,
    pub table_align: Alignment,

    // Tree cleaner
    pub treecleaner_skip_methods: Vec<String>,

    // Images
    /// CSS-style `(top, right, bottom, left)` margins of left-floated images.
    pub img_margins_float_left: [f32; 4],
    pub img_margins_float_right: [f32; 4],
    pub img_margins_float: [f32; 4],
    pub img_default_thumb_width: u32,
    /// Fraction of the print width a floated image may take.
    pub img_max_thumb_width: f32,
    pub img_max_thumb_height: f32,
    pub img_min_res: u32,
    pub img_inline_scale_factor: f32,
    /// Pixel width treated as the full print width.
    pub print_width_px: u32,
    pub img_border_color: Color,
    pub link_images: bool,

    // Text
    pub font_size: f32,
    pub leading: f32,
    /// Alignment of body text outside tables.
    pub text_align: Alignment,
    /// Alignment of body text inside tables.
    pub table_text_align: Alignment,
    pub min_lines_after_heading: u32,
    pub small_font_size: f32,
    pub small_leading: f32,
    pub big_font_size: f32,
    pub big_leading: f32,
    /// Indentation per level of indented paragraphs.
    pub para_left_indent: f32,
    pub para_right_indent: f32,
    /// Indentation per level of lists.
    pub list_left_indent: f32,
    pub tabsize: u32,
    pub source_max_line_len: u32,
    pub no_float_math_len: u32,
    pub max_math_width: u32,
    pub max_math_height: u32,
    /// Active word-wrap mode for the whole document.
    pub word_wrap: Option<WordWrap>,
    pub min_preformatted_size: f32,

    // Misc
    pub chapter_rule_color: Color,
    pub list_item_style: String,
    pub url_blacklist: Vec<String>,
    /// Move long URLs found in tables into the references section.
    pub url_ref_in_table: bool,
    pub url_ref_len: u32,
    /// Background of box, source and preformatted paragraphs.
    pub box_background: Color,
    pub box_border_padding: f32,
}

impl Default for Config {
    fn default() -> Self {
        let (page_width, page_height) = A4;
        let page_margin = 2.0 * CM;

        Self {
            serif_font: "FreeSerif".to_string(),
            sans_font: "FreeSans".to_string(),
            mono_font: "FreeMono".to_string(),
            default_font: "FreeSerif".to_string(),

            page_width,
            page_height,
            page_margin_left: page_margin,
            page_margin_right: page_margin,
            page_margin_top: page_margin,
            page_margin_bottom: page_margin,
            header_margin_hor: 1.5 * CM,
            header_margin_vert: 1.5 * CM,
            footer_margin_hor: 1.5 * CM,
            footer_margin_vert: 1.5 * CM,
            title_margin_left: page_margin,
            title_margin_right: page_margin,
            title_margin_top: page_margin,
            title_margin_bottom: page_margin,

            show_title_page: true,
            show_title_page_footer: true,
            show_page_header: true,
            show_page_footer: true,
            page_break_after_article: false,
            show_article_attribution: true,
            show_article_hr: true,
            show_wiki_license: true,
            pagefooter: String::new(),

            title_page_image: String::new(),
            title_page_image_size: (12.0 * CM, 17.0 * CM),
            title_page_image_pos: (None, None),
            titlepagefooter: "PDF generated using the open source mwlib toolkit. \
                              See http://code.pediapress.com/ for more information."
                .to_string(),
            show_creation_date: true,
            render_toc: true,

            table_overflow_tolerance: 20.0,
            cell_padding: 3.0,
            min_rows_for_break: 3,
            table_widths_from_markup: false,
            table_align: Alignment::Center,

            treecleaner_skip_methods: vec![
                "fixPreFormatted".to_string(),
                "removeEmptyReferenceLists".to_string(),
            ],

            img_margins_float_left: [0.0, 0.4 * CM, 0.7 * CM, 0.0],
            img_margins_float_right: [0.0, 0.0, 0.7 * CM, 0.4 * CM],
            img_margins_float: [0.2 * CM; 4],
            img_default_thumb_width: 180,
            img_max_thumb_width: 0.6,
            img_max_thumb_height: 0.45,
            img_min_res: 75,
            img_inline_scale_factor: 0.7,
            print_width_px: 540,
            img_border_color: Color::rgb(0.75, 0.75, 0.75),
            link_images: true,

            font_size: 10.0,
            leading: 15.0,
            text_align: Alignment::Justify,
            table_text_align: Alignment::Left,
            min_lines_after_heading: 5,
            small_font_size: 8.0,
            small_leading: 12.0,
            big_font_size: 12.0,
            big_leading: 17.0,
            para_left_indent: 25.0,
            para_right_indent: 25.0,
            list_left_indent: 12.0,
            tabsize: 6,
            source_max_line_len: 72,
            no_float_math_len: 150,
            max_math_width: 2500,
            max_math_height: 2500,
            word_wrap: None,
            min_preformatted_size: 5.0,

            chapter_rule_color: Color::BLACK,
            list_item_style: "\u{2022}".to_string(),
            url_blacklist: vec!["http://toolserver.org".to_string()],
            url_ref_in_table: true,
            url_ref_len: 30,
            box_background: Color::rgb(238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0),
            box_border_padding: 3.0,
        }
    }
}

impl Config {
    /// Returns a copy of this config with a different word-wrap mode.
    pub fn with_word_wrap(mut self, word_wrap: Option<WordWrap>) -> Self {
        self.word_wrap = word_wrap;
        self
    }
}
