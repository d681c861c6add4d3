pub mod initialize;
pub mod transfer_authority;
pub mod create_template;
pub mod reward_fragment;
pub mod redeem;

pub use initialize::*;
pub use transfer_authority::*;
pub use create_template::*;
pub use reward_fragment::*;
pub use redeem::*;
