//! Shared plumbing for the VaultNet ledgers.
//!
//! Every ledger program (value token, fragments, completions, rewards, registry)
//! embeds one [`AuthoritySlot`] in its configuration account and checks it at the
//! top of each privileged instruction. The bootstrap sequence hands each slot to
//! the next program up the chain exactly once:
//!
//! ```text
//! fragments   ──► rewards
//! completions ──► rewards
//! rewards     ──► registry
//! ```
//!
//! [`record`] holds the raw load/store helpers used where a missing PDA must map
//! to a domain error instead of Anchor's `AccountNotInitialized`.

pub mod authority;
pub mod record;

pub use authority::*;
pub use record::*;
