//! Decoding of aluminum-extrusion part numbers.
//!
//! A part number such as `HFSB5-2020-500-LCP-RCP-AV360` packs an extrusion
//! series, a cross-section size, a cut length, and a sequence of
//! post-processing alteration codes into one hyphen-delimited string.
//! [`decode`] turns such a string into a structured [`Decoded`] record,
//! [`bom`] mines part numbers out of a bill-of-materials export, and
//! [`printer`] maps decoded extrusions onto known printer frames.

pub mod bom;
pub mod catalog;
pub mod domain;
pub mod printer;

pub use catalog::{Catalog, Category, LookupError};
pub use domain::{Config, DecodeError, Decoded, ResolvedAlteration, decode, decode_strict};
