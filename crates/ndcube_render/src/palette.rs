//! Line colors
//!
//! Each dimension from 3 to 10 has its own color; anything else is drawn
//! white. Facet cubes and the optional hue cycle use fully saturated HSL
//! colors.

/// Colors for dimensions 3 through 10
const DIMENSION_PALETTE: [u32; 8] = [
    0x9b59b6, // 3D purple
    0xe74c3c, // 4D red
    0x3498db, // 5D blue
    0x1abc9c, // 6D teal
    0xf1c40f, // 7D yellow
    0xe67e22, // 8D orange
    0x2ecc71, // 9D green
    0x34495e, // 10D dark blue
];

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Convert `0xRRGGBB` to linear-agnostic RGBA in [0, 1]
pub fn hex_to_rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

/// Palette color for a hypercube of dimension `n`
pub fn dimension_color(n: usize) -> [f32; 4] {
    match n.checked_sub(3).and_then(|i| DIMENSION_PALETTE.get(i)) {
        Some(&hex) => hex_to_rgba(hex, 1.0),
        None => WHITE,
    }
}

/// HSL to RGB, all components in [0, 1]. Hue wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Fully saturated, mid-lightness color for `hue`
pub fn hue_color(hue: f32) -> [f32; 4] {
    let [r, g, b] = hsl_to_rgb(hue, 1.0, 0.5);
    [r, g, b, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(&b).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_dimension_palette() {
        assert_eq!(dimension_color(3), hex_to_rgba(0x9b59b6, 1.0));
        assert_eq!(dimension_color(10), hex_to_rgba(0x34495e, 1.0));
        assert_eq!(dimension_color(2), WHITE);
        assert_eq!(dimension_color(11), WHITE);
        assert_eq!(dimension_color(0), WHITE);
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba(0xff0000, 0.5), [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(hex_to_rgba(0x00ff00, 1.0), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(approx(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(approx(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(approx(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
        assert!(approx(hsl_to_rgb(1.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hsl_greys() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]);
        assert!(approx(hsl_to_rgb(0.7, 1.0, 1.0), [1.0, 1.0, 1.0]));
    }
}
