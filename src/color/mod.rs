//! Device-independent color math.
//!
//! Everything in here is total: malformed hex input normalizes to a
//! best-effort value and every numeric conversion is defined for finite
//! inputs. Nothing in this module returns a `Result`.

pub mod delta_e;
pub mod hex;
pub mod lrv;
pub mod space;

pub use delta_e::ciede2000;
pub use hex::{hex_to_rgb, normalize_hex, NEUTRAL_GRAY_HEX};
pub use lrv::{lrv_for_hex, LrvCache};
pub use space::{
    hue_difference, hue_distance, lab_to_lch, lch_to_lab, rgb_to_lab, rgb_to_xyz, wrap_hue,
    xyz_to_lab, Lab, Lch, Xyz,
};
