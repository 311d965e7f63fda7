//! Utility functions

pub mod common;
pub mod id_gen;

pub use common::{datetime_from_millis, format_millis, mask_string, now_millis};
pub use id_gen::IdSequence;
