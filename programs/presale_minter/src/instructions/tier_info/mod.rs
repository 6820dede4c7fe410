pub mod get_tier_status;

pub use get_tier_status::*;
