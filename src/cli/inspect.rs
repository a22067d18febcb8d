//! Inspect command: show every color representation of a hex value.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliResult};
use crate::color::{self, normalize_hex};

/// Show normalized hex, RGB, XYZ, LAB, LCH and LRV for a color
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Hex color in any common spelling (#fff, 0x112233, AARRGGBB)
    #[arg(long, value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectOutput {
    input: String,
    hex: String,
    rgb: [u8; 3],
    xyz: [f64; 3],
    lab: [f64; 3],
    lch: [f64; 3],
    lrv: f64,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let hex = normalize_hex(&self.hex);
        let rgb = color::hex_to_rgb(&hex);
        let xyz = color::rgb_to_xyz(rgb);
        let lab = color::xyz_to_lab(xyz);
        let lch = lab.to_lch();
        let lrv = color::lrv_for_hex(&hex);

        if self.json {
            return print_json(&InspectOutput {
                input: self.hex.clone(),
                hex: format!("#{hex}"),
                rgb,
                xyz: [xyz.x, xyz.y, xyz.z],
                lab: lab.to_array(),
                lch: lch.to_array(),
                lrv,
            });
        }

        println!("Hex: #{hex}");
        println!("RGB: {} {} {}", rgb[0], rgb[1], rgb[2]);
        println!("XYZ: {:.3} {:.3} {:.3}", xyz.x, xyz.y, xyz.z);
        println!("LAB: {:.2} {:.2} {:.2}", lab.l, lab.a, lab.b);
        println!("LCH: {:.2} {:.2} {:.1}°", lch.l, lch.c, lch.h);
        println!("LRV: {lrv:.1}");

        Ok(())
    }
}
