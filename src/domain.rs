//! Domain models: decoded part numbers and runtime configuration.

mod config;
pub use config::{Config, Error as ConfigError};

/// Part-number decoding and assembly.
pub mod part_number;
pub use part_number::{
    Decoded, Error as DecodeError, ResolvedAlteration, decode, decode_strict, encode,
};
