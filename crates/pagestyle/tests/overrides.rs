//! Startup override loading against real files.

use std::fs;

use pagestyle::config::overrides;
use pagestyle::{
    Alignment, Config, ConfigError, ParagraphRequest, StyleSheet, WordWrap, CUSTOM_CONFIG_FILE,
};
use tempfile::TempDir;

fn write_override(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_override_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let sheet = StyleSheet::load(dir.path()).unwrap();
    assert_eq!(sheet.config(), &Config::default());
    assert_eq!(sheet, StyleSheet::default());
}

#[test]
fn test_missing_override_is_none() {
    let dir = TempDir::new().unwrap();
    let loaded = overrides::load(&dir.path().join(CUSTOM_CONFIG_FILE)).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_yaml_override_applies_before_metrics() {
    let dir = TempDir::new().unwrap();
    write_override(
        &dir,
        CUSTOM_CONFIG_FILE,
        "page_height: 800\npage_margin_top: 50\npage_margin_bottom: 50\nfont_size: 11\n",
    );

    let sheet = StyleSheet::load(dir.path()).unwrap();
    assert_eq!(sheet.config().font_size, 11.0);
    assert_eq!(sheet.metrics().print_height, 700.0);
    assert_eq!(sheet.metrics().article_start_min_space, 350.0);
    assert_eq!(sheet.metrics().min_table_space, 175.0);

    let style = sheet.paragraph_style(&ParagraphRequest::new("p"));
    assert_eq!(style.font_size, 11.0);
}

#[test]
fn test_yaml_override_switches_to_rtl() {
    let dir = TempDir::new().unwrap();
    write_override(&dir, CUSTOM_CONFIG_FILE, "word_wrap: RTL\n");

    let sheet = StyleSheet::load(dir.path()).unwrap();
    assert_eq!(sheet.config().word_wrap, Some(WordWrap::Rtl));

    let style = sheet.paragraph_style(&ParagraphRequest::new("blockquote").indent(1));
    assert_eq!(style.alignment, Alignment::Right);
    assert_eq!(style.left_indent, 25.0);
    assert_eq!(style.right_indent, 50.0);
}

#[test]
fn test_json_override_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_override(
        &dir,
        "customconfig.json",
        r##"{"box_background": "#ddeeff", "mono_font": "DejaVuSansMono"}"##,
    );

    let sheet = StyleSheet::load_from(&path).unwrap();
    let style = sheet.paragraph_style(&ParagraphRequest::new("preformatted"));
    assert_eq!(style.font_name, "DejaVuSansMono");
    assert_eq!(style.back_color.map(|c| c.to_hex()), Some("#ddeeff".to_string()));
}

#[test]
fn test_malformed_override_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_override(&dir, CUSTOM_CONFIG_FILE, "font_size: [11\n");

    let err = StyleSheet::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got {err}");
}

#[test]
fn test_unknown_constant_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_override(&dir, CUSTOM_CONFIG_FILE, "font_size: 11\nfont_sise: 12\n");

    let err = StyleSheet::load(dir.path()).unwrap_err();
    match err {
        ConfigError::UnknownKey { key } => assert_eq!(key, "font_sise"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ill_typed_constant_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_override(&dir, CUSTOM_CONFIG_FILE, "text_align: diagonal\n");

    let err = StyleSheet::load(dir.path()).unwrap_err();
    match err {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "text_align"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_scalar_document_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_override(&dir, CUSTOM_CONFIG_FILE, "just a string\n");

    let err = StyleSheet::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NotAMap { .. }), "got {err}");
}

#[test]
fn test_unreadable_override_is_fatal() {
    let dir = TempDir::new().unwrap();
    // A directory in place of the file exists but cannot be read as text.
    fs::create_dir(dir.path().join(CUSTOM_CONFIG_FILE)).unwrap();

    let err = StyleSheet::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "got {err}");
}
