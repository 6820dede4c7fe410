pub mod admin_mint;
pub mod issuance_utils;
pub mod mint;

pub use admin_mint::*;
pub use issuance_utils::*;
pub use mint::*;
