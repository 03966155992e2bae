// File: crates/sparkline-core/tests/color.rs
// Purpose: Tooltip contrast decision and hex parsing fallbacks.

use sparkline_core::{resolve, ColorPair, Rgb};

#[test]
fn white_and_black_backgrounds() {
    assert_eq!(resolve("#FFFFFF"), ColorPair { foreground: Rgb::BLACK, background: Rgb::WHITE });
    assert_eq!(resolve("#000000"), ColorPair { foreground: Rgb::WHITE, background: Rgb::DARK_GRAY });
}

#[test]
fn threshold_splits_mid_grays() {
    // 128/255 ≈ 0.502, 127/255 ≈ 0.498
    assert_eq!(resolve("#808080"), ColorPair::DARK_ON_LIGHT);
    assert_eq!(resolve("#7f7f7f"), ColorPair::LIGHT_ON_DARK);
}

#[test]
fn default_light_gray_background_gets_dark_text() {
    assert_eq!(resolve(sparkline_core::theme::BACKGROUND), ColorPair::DARK_ON_LIGHT);
}

#[test]
fn shorthand_and_bare_hex() {
    assert_eq!(Rgb::parse_lossy("#abc"), Rgb::new(0xaa, 0xbb, 0xcc));
    assert_eq!(Rgb::parse_lossy("3B82F6"), Rgb::new(0x3b, 0x82, 0xf6));
    assert_eq!(Rgb::new(0x3b, 0x82, 0xf6).to_string(), "#3b82f6");
}

#[test]
fn malformed_channels_count_as_zero() {
    assert_eq!(Rgb::parse_lossy("#zzffff"), Rgb::new(0, 255, 255));
    assert_eq!(Rgb::parse_lossy("+1ffff"), Rgb::new(0, 255, 255));
    assert_eq!(Rgb::parse_lossy("not-a-color"), Rgb::BLACK);
    assert_eq!(Rgb::parse_lossy(""), Rgb::BLACK);
    // cyan-ish remainder is still bright enough for dark text
    assert_eq!(resolve("#zzffff"), ColorPair::DARK_ON_LIGHT);
    assert_eq!(resolve("rgb(255,255,255)"), ColorPair::LIGHT_ON_DARK);
}

#[test]
fn only_two_outcomes() {
    for v in (0..=255).step_by(15) {
        let pair = resolve(&format!("#{v:02x}{v:02x}{v:02x}"));
        assert!(pair == ColorPair::DARK_ON_LIGHT || pair == ColorPair::LIGHT_ON_DARK);
    }
}
