//! Password generation and evaluation
//!
//! Passwords are drawn uniformly from the pool of enabled character classes
//! using a cryptographically strong RNG, then scored with a simple heuristic
//! and given a brute-force crack-time estimate.

pub mod crack_time;
pub mod password;
pub mod policy;
pub mod strength;

pub use crack_time::{CrackTime, Summary, entropy_bits, estimate_crack_time};
pub use password::{PasswordGenerator, build_record, generate_password};
pub use policy::{CharClass, Policy};
pub use strength::{Strength, score};
