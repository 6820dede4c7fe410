pub mod ed25519_parser;
pub mod proof;

pub use proof::*;
