pub mod initialize;
pub mod transfer_authority;
pub mod mint;
pub mod burn;
pub mod burn_batch;
pub mod balance_of;
pub mod fragment_uri;

pub use initialize::*;
pub use transfer_authority::*;
pub use mint::*;
pub use burn::*;
pub use burn_batch::*;
pub use balance_of::*;
pub use fragment_uri::*;
