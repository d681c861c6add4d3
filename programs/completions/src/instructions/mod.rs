pub mod initialize;
pub mod transfer_authority;
pub mod mint;
pub mod read;

pub use initialize::*;
pub use transfer_authority::*;
pub use mint::*;
pub use read::*;
