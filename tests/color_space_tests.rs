//! Integration tests for hex parsing, color-space conversion, and CIEDE2000.

use palettesmith::color::{
    ciede2000, hex_to_rgb, lab_to_lch, lch_to_lab, lrv_for_hex, normalize_hex, rgb_to_lab, Lab,
    LrvCache,
};
use palettesmith::models::{RgbColor, Swatch, SwatchRecord};

mod fixtures;
use fixtures::SPREAD_HEXES;

const REPRESENTATIVE: [&str; 8] = [
    "#FFFFFF", "#000000", "#FF0000", "#00FF00", "#0000FF", "#808080", "#1B2A4A", "#E5C07B",
];

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Hex normalization
// ============================================================================

#[test]
fn test_normalize_hex_spellings() {
    assert_eq!(normalize_hex("#fff"), "FFFFFF");
    assert_eq!(normalize_hex("0x112233"), "112233");
    assert_eq!(normalize_hex("ff112233"), "112233");
    assert_eq!(normalize_hex("  #a1B2c3 "), "A1B2C3");
}

#[test]
fn test_normalize_hex_never_fails() {
    for input in ["", "#", "zzz", "not a color", "12", "#12345", "🎨", "0x"] {
        let hex = normalize_hex(input);
        assert_eq!(hex.len(), 6, "'{input}' normalized to '{hex}'");
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
    assert_eq!(normalize_hex(""), "000000");
    assert_eq!(normalize_hex("12"), "000012");
}

#[test]
fn test_hex_to_rgb_matches_model() {
    for hex in SPREAD_HEXES {
        let rgb = hex_to_rgb(hex);
        let model = RgbColor::from_hex(hex);
        assert_eq!(model.channels(), rgb);
        assert_eq!(model.to_hex(), hex);
    }
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_known_lab_values() {
    let white = rgb_to_lab([255, 255, 255]);
    assert_close(white.l, 100.0, 1e-3);
    assert_close(white.a, 0.0, 0.02);
    assert_close(white.b, 0.0, 0.02);

    let red = rgb_to_lab([255, 0, 0]);
    assert_close(red.l, 53.23, 0.01);
    assert_close(red.a, 80.11, 0.01);
    assert_close(red.b, 67.22, 0.01);

    let blue = rgb_to_lab([0, 0, 255]);
    assert_close(blue.l, 32.30, 0.01);
    assert_close(blue.b, -107.86, 0.01);

    assert_eq!(rgb_to_lab([0, 0, 0]), Lab::new(0.0, 0.0, 0.0));
}

#[test]
fn test_lch_round_trip() {
    for hex in REPRESENTATIVE.iter().chain(SPREAD_HEXES.iter()) {
        let lab = rgb_to_lab(hex_to_rgb(&normalize_hex(hex)));
        let lch = lab_to_lch(lab);
        let back = lch_to_lab(lch);

        assert!((0.0..360.0).contains(&lch.h), "{hex} hue {}", lch.h);
        assert_close(back.l, lab.l, 1e-6);
        assert_close(back.a, lab.a, 1e-6);
        assert_close(back.b, lab.b, 1e-6);
    }
}

#[test]
fn test_swatch_fields_agree() {
    let cache = LrvCache::new();
    for hex in SPREAD_HEXES {
        let swatch = Swatch::from_record(SwatchRecord::new(hex, "b", "B", format!("0x{hex}")), &cache);
        assert_eq!(swatch.hex(), hex);
        assert_eq!(swatch.lab(), rgb_to_lab(hex_to_rgb(hex)));
        assert_eq!(swatch.lch(), lab_to_lch(swatch.lab()));
        assert_close(swatch.lrv(), lrv_for_hex(hex), 1e-12);
    }
    assert_eq!(cache.len(), SPREAD_HEXES.len());
}

#[test]
fn test_lrv_increases_across_spread() {
    let lrvs: Vec<f64> = SPREAD_HEXES.iter().map(|hex| lrv_for_hex(hex)).collect();
    assert!(lrvs.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(lrvs[0] > 4.0 && lrvs[0] < 6.0);
    assert!(lrvs[19] > 94.0 && lrvs[19] < 96.0);
}

// ============================================================================
// CIEDE2000
// ============================================================================

#[test]
fn test_ciede2000_identity_and_symmetry() {
    let labs: Vec<Lab> = REPRESENTATIVE
        .iter()
        .chain(SPREAD_HEXES.iter())
        .map(|hex| rgb_to_lab(hex_to_rgb(hex)))
        .collect();

    for a in &labs {
        assert!(ciede2000(*a, *a).abs() < 1e-12);
        for b in &labs {
            let forward = ciede2000(*a, *b);
            let backward = ciede2000(*b, *a);
            assert!(forward >= 0.0);
            assert_close(forward, backward, 1e-9);
        }
    }
}

#[test]
fn test_ciede2000_reference_pair() {
    // Sharma, Wu & Dalal test data, pair 1
    let a = Lab::new(50.0, 2.6772, -79.7751);
    let b = Lab::new(50.0, 0.0, -82.7485);
    assert_close(ciede2000(a, b), 2.0425, 1e-4);
}

#[test]
fn test_ciede2000_black_white_is_large() {
    let black = rgb_to_lab([0, 0, 0]);
    let white = rgb_to_lab([255, 255, 255]);
    assert!(ciede2000(black, white) > 99.0);
}
