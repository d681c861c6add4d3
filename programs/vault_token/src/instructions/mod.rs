pub mod initialize;
pub mod open_balance;
pub mod transfer;
pub mod balance_of;
pub mod transfer_authority;

pub use initialize::*;
pub use open_balance::*;
pub use transfer::*;
pub use balance_of::*;
pub use transfer_authority::*;
