#![forbid(unsafe_code)]
#![doc = "Shared status and error types for the teebn workspace."]

pub mod error;

pub use error::*;
