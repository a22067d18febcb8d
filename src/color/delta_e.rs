//! CIEDE2000 color difference (ΔE00), CIE Technical Report 142-2001.
//!
//! Rough reading of the scale:
//! - ΔE00 < 1.0: imperceptible
//! - ΔE00 1.0-2.0: barely perceptible
//! - ΔE00 2.0-10.0: noticeable
//! - ΔE00 > 10.0: clearly different colors

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use super::space::Lab;

/// 25^7, used by the chroma correction factor G.
const TWENTY_FIVE_POW_7: f64 = 6_103_515_625.0;

// Parametric weights (graphic arts reference conditions)
const K_L: f64 = 1.0;
const K_C: f64 = 1.0;
const K_H: f64 = 1.0;

fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Perceptual distance between two CIELAB colors.
///
/// Symmetric in its arguments and zero iff both points are equal.
///
/// # Examples
///
/// ```
/// use palettesmith::color::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-4);
/// assert_eq!(ciede2000(a, a), 0.0);
/// ```
#[must_use]
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_mean_pow7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_mean_pow7 / (c_mean_pow7 + TWENTY_FIVE_POW_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);
    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);
    let h1_prime = hue_angle(b1, a1_prime);
    let h2_prime = hue_angle(b2, a2_prime);

    let delta_l = l2 - l1;
    let delta_c = c2_prime - c1_prime;

    let chroma_product = c1_prime * c2_prime;
    let delta_h = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_big_h = 2.0 * chroma_product.sqrt() * (delta_h.to_radians() / 2.0).sin();

    let l_mean = (l1 + l2) / 2.0;
    let c_mean_prime = (c1_prime + c2_prime) / 2.0;
    let h_mean = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_offset_sq = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_mean_prime;
    let s_h = 1.0 + 0.015 * c_mean_prime * t;

    let delta_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let c_mean_prime_pow7 = c_mean_prime.powi(7);
    let r_c = 2.0 * (c_mean_prime_pow7 / (c_mean_prime_pow7 + TWENTY_FIVE_POW_7)).sqrt();
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let l_term = delta_l / (K_L * s_l);
    let c_term = delta_c / (K_C * s_c);
    let h_term = delta_big_h / (K_H * s_h);

    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term)
        .max(0.0)
        .sqrt()
}
