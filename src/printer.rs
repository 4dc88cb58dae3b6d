//! Printer frame profiles.
//!
//! A profile knows which build volumes a printer ships in, the frame
//! extrusions each volume needs, and how to recognise which frame position
//! a decoded extrusion belongs to.

mod trident;

pub use trident::Trident;

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::domain::Decoded;

/// An X x Y x Z build volume, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildVolume {
    /// X dimension (mm).
    pub x: u32,
    /// Y dimension (mm).
    pub y: u32,
    /// Z dimension (mm).
    pub z: u32,
}

impl BuildVolume {
    /// Create a build volume.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BuildVolume {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Error parsing a build-volume string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid build volume '{0}': expected XxYxZ, e.g. 350x350x250")]
pub struct VolumeError(String);

impl FromStr for BuildVolume {
    type Err = VolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(VolumeError(s.to_string()));
        };

        let parse = |dim: &str| dim.parse().map_err(|_| VolumeError(s.to_string()));
        Ok(Self::new(parse(x)?, parse(y)?, parse(z)?))
    }
}

/// One extrusion in a printer frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSpec {
    /// Assembly-manual letter designation.
    pub designation: char,
    /// Cut length (mm).
    pub length: u32,
    /// How many of this extrusion the frame needs.
    pub quantity: u32,
    /// Alteration codes to order with the extrusion.
    pub alterations: Vec<String>,
    /// What this extrusion does in the frame.
    pub role: &'static str,
}

/// A printer whose frame is built from catalogued extrusions.
pub trait Printer: Send + Sync {
    /// Short registry name.
    fn name(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// Build volumes this profile has frame data for.
    fn build_volumes(&self) -> Vec<BuildVolume>;

    /// The frame extrusion list for a build volume.
    fn frame_specs(&self, volume: BuildVolume) -> Vec<FrameSpec>;

    /// Identify the frame letter a decoded extrusion corresponds to.
    ///
    /// Without a build volume only the fixed-length members can be
    /// identified; pass the volume (detected or known) to resolve the
    /// size-dependent ones.
    fn designation(&self, decoded: &Decoded, quantity: u32, volume: Option<BuildVolume>)
    -> Option<char>;

    /// Infer the build volume from a set of decoded frame extrusions.
    fn detect_volume(&self, decoded: &[&Decoded]) -> Option<BuildVolume> {
        let _ = decoded;
        None
    }

    /// Whether the profile has frame data for this build volume.
    fn supports(&self, volume: BuildVolume) -> bool {
        self.build_volumes().contains(&volume)
    }
}

/// Look up a printer profile by name.
#[must_use]
pub fn get(name: &str) -> Option<&'static dyn Printer> {
    match name.to_ascii_lowercase().as_str() {
        "trident" => Some(&Trident),
        _ => None,
    }
}

/// Names of all registered printer profiles.
#[must_use]
pub const fn names() -> &'static [&'static str] {
    &["trident"]
}
