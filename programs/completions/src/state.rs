use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::errors::CompletionError;

/// Maximum token URI length in bytes
pub const MAX_URI_LEN: usize = 128;

#[account]
pub struct CompletionLedger {
    /// The minter slot
    pub authority: AuthoritySlot,
    /// Id the next mint will receive
    pub next_token_id: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl CompletionLedger {
    pub const SEED: &'static [u8] = b"completion_ledger";

    pub const SIZE: usize = 8 + AuthoritySlot::SIZE + 8 + 1;

    /// Reserve the next token id. Ids start at 0 and never repeat.
    pub fn issue_id(&mut self) -> Result<u64> {
        let id = self.next_token_id;
        self.next_token_id = id.checked_add(1).ok_or(CompletionError::Overflow)?;
        Ok(id)
    }

    /// Tokens minted so far
    pub fn supply(&self) -> u64 {
        self.next_token_id
    }
}

#[account]
pub struct CompletionToken {
    pub token_id: u64,
    pub owner: Pubkey,
    /// The redeemed template's final reference
    pub uri: String,
    pub minted_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl CompletionToken {
    pub const SEED: &'static [u8] = b"completion_token";

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // token_id
        32 +                     // owner
        4 + MAX_URI_LEN +        // uri
        8 +                      // minted_at
        1;                       // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_zero_and_increase() {
        let mut ledger = CompletionLedger {
            authority: AuthoritySlot::new(Pubkey::new_unique()),
            next_token_id: 0,
            bump: 255,
        };

        assert_eq!(ledger.issue_id().unwrap(), 0);
        assert_eq!(ledger.issue_id().unwrap(), 1);
        assert_eq!(ledger.issue_id().unwrap(), 2);
        assert_eq!(ledger.supply(), 3);
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let mut ledger = CompletionLedger {
            authority: AuthoritySlot::new(Pubkey::new_unique()),
            next_token_id: u64::MAX,
            bump: 255,
        };

        assert!(ledger.issue_id().is_err());
        assert_eq!(ledger.next_token_id, u64::MAX);
    }
}
