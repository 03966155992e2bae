// File: crates/sparkline-core/tests/config.rs
// Purpose: TOML option parsing, defaults, aliases and validation.

use sparkline_core::{GradientColors, SparklineConfig, SparklineError, SparklineOptions};

#[test]
fn defaults_match_documented_values() {
    let o = SparklineOptions::default();
    assert_eq!((o.width, o.height, o.stroke_width), (300.0, 100.0, 3.0));
    assert!(o.animate && o.show_dots && o.show_tooltip);
    assert_eq!(o.gradient_colors, GradientColors::new("#3b82f6", "#8b5cf6"));
    assert_eq!(o.background_color, "#f3f4f6");
}

#[test]
fn empty_document_is_all_defaults() {
    let cfg = SparklineConfig::from_toml_str("").expect("parse empty");
    assert!(cfg.data.is_empty());
    assert_eq!(cfg.options, SparklineOptions::default());
}

#[test]
fn parses_snake_and_camel_case_keys() {
    let cfg = SparklineConfig::from_toml_str(
        r##"
data = [1, 2.5, 3]
width = 200
strokeWidth = 2
show_dots = false
showTooltip = false
gradient_colors = ["#000000", "#ffffff"]
backgroundColor = "#101010"
"##,
    )
    .expect("parse");
    assert_eq!(cfg.data, vec![1.0, 2.5, 3.0]);
    assert_eq!(cfg.options.width, 200.0);
    assert_eq!(cfg.options.height, 100.0);
    assert_eq!(cfg.options.stroke_width, 2.0);
    assert!(!cfg.options.show_dots);
    assert!(!cfg.options.show_tooltip);
    assert!(cfg.options.animate);
    assert_eq!(cfg.options.gradient_colors, GradientColors::new("#000000", "#ffffff"));
    assert_eq!(cfg.options.background_color, "#101010");
}

#[test]
fn rejects_non_positive_extent() {
    let err = SparklineConfig::from_toml_str("width = 0").expect_err("zero width");
    assert!(matches!(err, SparklineError::InvalidOption { name: "width", .. }));

    let mut o = SparklineOptions::default();
    o.stroke_width = f64::NAN;
    assert!(matches!(o.validate(), Err(SparklineError::InvalidOption { name: "stroke_width", .. })));
}

#[test]
fn reports_toml_errors() {
    let err = SparklineConfig::from_toml_str("width = \"wide\"").expect_err("bad type");
    assert!(matches!(err, SparklineError::TomlParse(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = SparklineConfig::load("target/test_out/does-not-exist.toml").expect_err("missing");
    assert!(err.to_string().contains("does-not-exist.toml"));
}
