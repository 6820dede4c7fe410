pub mod asset_utils;
pub mod eligibility;
pub mod payment_utils;

pub use asset_utils::*;
pub use eligibility::*;
pub use payment_utils::*;
