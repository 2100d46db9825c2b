use crate::core::colour_space::models::{Cmyk, GamutMapped, RgbF, Xyz};
use crate::core::data::colour::Colour;

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

fn apply(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

fn linearize(value: f64) -> f64 {
    if value > 0.040_45 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

fn gamma_correct(value: f64) -> f64 {
    if value > 0.003_130_8 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

#[must_use]
pub fn rgb_to_cmyk(colour: Colour) -> Cmyk {
    let RgbF { r, g, b } = RgbF::from(colour);
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 100.0,
        };
    }

    Cmyk {
        c: (1.0 - r - k) / (1.0 - k) * 100.0,
        m: (1.0 - g - k) / (1.0 - k) * 100.0,
        y: (1.0 - b - k) / (1.0 - k) * 100.0,
        k: k * 100.0,
    }
}

#[must_use]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> RgbF {
    let (c, m, y, k) = (cmyk.c / 100.0, cmyk.m / 100.0, cmyk.y / 100.0, cmyk.k / 100.0);

    RgbF {
        r: 255.0 * (1.0 - c) * (1.0 - k),
        g: 255.0 * (1.0 - m) * (1.0 - k),
        b: 255.0 * (1.0 - y) * (1.0 - k),
    }
}

/// sRGB to XYZ (D65): linearize, apply the sRGB matrix, scale by 100.
#[must_use]
pub fn rgb_to_xyz(colour: Colour) -> Xyz {
    let RgbF { r, g, b } = RgbF::from(colour);
    let linear = [r, g, b].map(|channel| linearize(channel / 255.0));
    let [x, y, z] = apply(&RGB_TO_XYZ, linear);

    Xyz {
        x: x * 100.0,
        y: y * 100.0,
        z: z * 100.0,
    }
}

/// XYZ (D65) to sRGB. Channels outside `[0, 1]` after gamma correction are
/// clamped and the result is flagged as out of gamut.
#[must_use]
pub fn xyz_to_rgb(xyz: Xyz) -> GamutMapped<RgbF> {
    let linear = apply(&XYZ_TO_RGB, [xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0]);
    let corrected = linear.map(gamma_correct);

    let out_of_gamut = corrected.iter().any(|v| !(0.0..=1.0).contains(v));
    let [r, g, b] = corrected.map(|v| v.clamp(0.0, 1.0) * 255.0);

    GamutMapped {
        value: RgbF { r, g, b },
        out_of_gamut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_black_is_full_key() {
        assert_eq!(
            rgb_to_cmyk(Colour::new(0, 0, 0)),
            Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0
            }
        );
    }

    #[test]
    fn test_primary_red_in_cmyk() {
        let cmyk = rgb_to_cmyk(Colour::new(255, 0, 0));

        assert!(close(cmyk.c, 0.0, 1e-9));
        assert!(close(cmyk.m, 100.0, 1e-9));
        assert!(close(cmyk.y, 100.0, 1e-9));
        assert!(close(cmyk.k, 0.0, 1e-9));
    }

    #[test]
    fn test_cmyk_round_trip() {
        for colour in [
            Colour::from_hex(0x4a90e2),
            Colour::from_hex(0x1e1e1e),
            Colour::from_hex(0xff00ff),
            Colour::from_hex(0x010203),
        ] {
            assert_eq!(cmyk_to_rgb(rgb_to_cmyk(colour)).to_colour(), colour);
        }
    }

    #[test]
    fn test_white_in_xyz_is_d65() {
        let xyz = rgb_to_xyz(Colour::new(255, 255, 255));

        assert!(close(xyz.x, 95.047, 1e-3));
        assert!(close(xyz.y, 100.0, 1e-3));
        assert!(close(xyz.z, 108.883, 1e-3));
    }

    #[test]
    fn test_xyz_round_trip_in_gamut() {
        for colour in [
            Colour::from_hex(0x808080),
            Colour::from_hex(0x4a90e2),
            Colour::from_hex(0x335511),
        ] {
            let back = xyz_to_rgb(rgb_to_xyz(colour));

            assert!(!back.out_of_gamut, "{:?}", colour);
            assert_eq!(back.value.to_colour(), colour);
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped_and_flagged() {
        let mapped = xyz_to_rgb(Xyz {
            x: 100.0,
            y: 0.0,
            z: 0.0,
        });

        assert!(mapped.out_of_gamut);
        assert_eq!(mapped.value.r, 255.0);
        assert_eq!(mapped.value.g, 0.0);
    }

    #[test]
    fn test_dark_values_use_linear_segment() {
        let xyz = rgb_to_xyz(Colour::new(10, 10, 10));
        let expected_linear = (10.0 / 255.0) / 12.92;

        assert!(close(xyz.y, expected_linear * 100.0, 1e-4));
    }
}
