pub mod initialize;
pub mod set_default_template;
pub mod transfer_authority;
pub mod publish;
pub mod update;
pub mod purchase_access;
pub mod read;

pub use initialize::*;
pub use set_default_template::*;
pub use transfer_authority::*;
pub use publish::*;
pub use update::*;
pub use purchase_access::*;
pub use read::*;
