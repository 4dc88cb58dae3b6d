//! Voron Trident frame profile.
//!
//! The frame is a cube: four vertical B uprights, nine A horizontals across
//! the top and bottom faces and the side midpoints, a C bottom-rear rail
//! with a wrench hole at its midpoint, and the D through H members carrying
//! the gantry and print bed. The standard kits share a 250mm Z height and
//! vary only in X/Y, so B and H keep their lengths across the 250/300/350
//! variants while everything else scales with X.

use super::{BuildVolume, FrameSpec, Printer};
use crate::catalog::Category;
use crate::domain::Decoded;

/// The Voron Trident.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trident;

const STANDARD_Z: u32 = 250;
/// Upright length for the standard 250mm Z height.
const B_LENGTH: u32 = 500;
/// Rear center vertical, fixed for the standard Z height.
const H_LENGTH: u32 = 330;
/// Tolerance (mm) when matching a wrench-hole position against a rail
/// midpoint.
const MIDPOINT_TOLERANCE: u32 = 5;

impl Printer for Trident {
    fn name(&self) -> &'static str {
        "trident"
    }

    fn display_name(&self) -> &'static str {
        "Voron Trident"
    }

    fn build_volumes(&self) -> Vec<BuildVolume> {
        vec![
            BuildVolume::new(250, 250, STANDARD_Z),
            BuildVolume::new(300, 300, STANDARD_Z),
            BuildVolume::new(350, 350, STANDARD_Z),
        ]
    }

    fn frame_specs(&self, volume: BuildVolume) -> Vec<FrameSpec> {
        let x = volume.x;
        let rail = x + 120;
        let midpoint_hole = format!("AH{}", rail / 2);

        vec![
            FrameSpec {
                designation: 'A',
                length: rail,
                quantity: 9,
                alterations: vec!["TPW".to_string()],
                role: "Horizontal frame extrusions (3 bottom, 4 top, 2 middle sides)",
            },
            FrameSpec {
                designation: 'B',
                length: B_LENGTH,
                quantity: 4,
                alterations: vec![
                    "LCP".to_string(),
                    "RCP".to_string(),
                    "AV360".to_string(),
                ],
                role: "Vertical upright extrusions (span full height, 4 corners)",
            },
            FrameSpec {
                designation: 'C',
                length: rail,
                quantity: 1,
                alterations: vec![midpoint_hole.clone(), "TPW".to_string()],
                role: "Bottom rear horizontal extrusion (wrench hole at midpoint, tapped ends)",
            },
            FrameSpec {
                designation: 'D',
                length: x.saturating_sub(10),
                quantity: 1,
                alterations: Vec::new(),
                role: "Rear brace of the print-head gantry support",
            },
            FrameSpec {
                designation: 'E',
                length: x + 80,
                quantity: 1,
                alterations: Vec::new(),
                role: "Gantry X-axis extrusion (carries the print head)",
            },
            FrameSpec {
                designation: 'F',
                length: rail,
                quantity: 1,
                alterations: vec![midpoint_hole],
                role: "Print bed support extrusion (G mounts to its midpoint)",
            },
            FrameSpec {
                designation: 'G',
                length: x.saturating_sub(18),
                quantity: 1,
                alterations: vec!["LTP".to_string()],
                role: "Print bed support extrusion (mounts to F midpoint)",
            },
            FrameSpec {
                designation: 'H',
                length: H_LENGTH,
                quantity: 1,
                alterations: vec!["LTP".to_string()],
                role: "Vertical center extrusion (mounts to C center, D mounts to its top)",
            },
        ]
    }

    fn designation(
        &self,
        decoded: &Decoded,
        quantity: u32,
        volume: Option<BuildVolume>,
    ) -> Option<char> {
        let length = decoded.length();
        let x = volume.map(|volume| volume.x);

        // B: the four uprights keep their 500mm length across all X/Y sizes.
        if length == B_LENGTH
            && decoded.has_alteration("LCP")
            && decoded.has_alteration("RCP")
            && decoded.has_alteration("AV360")
        {
            return Some('B');
        }

        let end_tapped = decoded.has_alteration("TPW");
        let positioned = positioned_hole(decoded);
        let at_midpoint = positioned
            .is_some_and(|position| position.abs_diff(length / 2) <= MIDPOINT_TOLERANCE);

        if let Some(x) = x {
            let rail = x + 120;

            // C and F both carry a midpoint wrench hole on an A-length
            // rail; C has tapped ends, F does not.
            if length == rail && at_midpoint && quantity == 1 {
                return Some(if end_tapped { 'C' } else { 'F' });
            }

            // A: plain end-tapped rails with no positioned wrench hole.
            if length == rail && end_tapped && positioned.is_none() {
                return Some('A');
            }

            // D and E: bare cuts distinguished by length alone.
            if decoded.alterations().is_empty() && quantity == 1 {
                if length + 10 == x {
                    return Some('D');
                }
                if length == x + 80 {
                    return Some('E');
                }
            }

            if decoded.has_alteration("LTP") && quantity == 1 && length + 18 == x {
                return Some('G');
            }
        }

        // H is fixed-length, so it resolves even without a known volume.
        if decoded.has_alteration("LTP") && quantity == 1 && length == H_LENGTH {
            return Some('H');
        }

        None
    }

    fn detect_volume(&self, decoded: &[&Decoded]) -> Option<BuildVolume> {
        // The nine A rails are the most numerous frame member; their length
        // is X + 120 for the standard kits.
        decoded.iter().find_map(|part| {
            if !part.has_alteration("TPW") {
                return None;
            }
            let x = part.length().checked_sub(120)?;
            matches!(x, 250 | 300 | 350).then(|| BuildVolume::new(x, x, STANDARD_Z))
        })
    }
}

/// The position value of the first specified-position wrench hole, if any.
fn positioned_hole(decoded: &Decoded) -> Option<u32> {
    decoded
        .alterations()
        .iter()
        .find(|alteration| alteration.category == Category::WrenchHoleSpecifiedPosition)
        .and_then(|alteration| alteration.value)
}
