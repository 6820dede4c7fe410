pub mod config;
pub mod initialization;
pub mod issuance;
pub mod tier_info;

pub use config::*;
pub use initialization::*;
pub use issuance::*;
pub use tier_info::*;
