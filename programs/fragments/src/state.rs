use anchor_lang::prelude::*;
use ledger_core::{load_record, store_record, AuthoritySlot};

use crate::errors::FragmentError;

// =============================================================================
// FRAGMENT LEDGER STATE
// =============================================================================
//
// A multi-class ledger: every token id is its own class and holdings are kept
// per (holder, token id) in a PDA. Only the authority holder may mint or burn.
// After bootstrap that holder is the reward manager's configuration PDA.
// =============================================================================

/// Maximum base URI length in bytes
pub const MAX_BASE_URI_LEN: usize = 128;

/// Placeholder substituted with the token id in `base_uri`
pub const ID_PLACEHOLDER: &str = "{id}";

#[account]
pub struct FragmentLedger {
    /// The minter slot
    pub authority: AuthoritySlot,
    /// Metadata URI template, `{id}` is replaced by the token id
    pub base_uri: String,
    /// Units ever minted across all classes
    pub total_minted: u64,
    /// Units ever burned across all classes
    pub total_burned: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl FragmentLedger {
    pub const SEED: &'static [u8] = b"fragment_ledger";

    pub const SIZE: usize = 8 +  // discriminator
        AuthoritySlot::SIZE +    // authority
        4 + MAX_BASE_URI_LEN +   // base_uri
        8 +                      // total_minted
        8 +                      // total_burned
        1;                       // bump

    pub fn uri(&self, token_id: u64) -> String {
        self.base_uri.replace(ID_PLACEHOLDER, &token_id.to_string())
    }

    pub fn record_mint(&mut self, amount: u64) -> Result<()> {
        self.total_minted = self
            .total_minted
            .checked_add(amount)
            .ok_or(FragmentError::Overflow)?;
        Ok(())
    }

    pub fn record_burn(&mut self, amount: u64) -> Result<()> {
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(FragmentError::Overflow)?;
        Ok(())
    }

    /// Units currently held across all classes
    pub fn circulating(&self) -> u64 {
        self.total_minted.saturating_sub(self.total_burned)
    }
}

/// One holder's balance of one token class
#[account]
pub struct FragmentBalance {
    pub holder: Pubkey,
    pub token_id: u64,
    pub amount: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl FragmentBalance {
    pub const SEED: &'static [u8] = b"fragment_balance";

    pub const SIZE: usize = 8 + 32 + 8 + 8 + 1;

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(FragmentError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, FragmentError::ZeroAmount);
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(FragmentError::InsufficientBalance)?;
        Ok(())
    }

    /// Read a holding from a raw balance account.
    ///
    /// A never-initialized account reads as `None`, i.e. a zero balance.
    pub fn load(info: &AccountInfo, holder: &Pubkey, token_id: u64) -> Result<Option<Self>> {
        let balance = load_record::<Self>(info)?;
        if let Some(balance) = &balance {
            require!(
                balance.holder == *holder && balance.token_id == token_id,
                FragmentError::BalanceMismatch
            );
        }
        Ok(balance)
    }
}

/// Debit `amounts[i]` of `token_ids[i]` from `holder` for every i.
///
/// Every holding is loaded and checked before any account is written, so a
/// shortfall anywhere in the batch leaves all balances untouched. Returns the
/// total number of units burned.
pub fn burn_holdings(
    balances: &[AccountInfo],
    holder: &Pubkey,
    token_ids: &[u64],
    amounts: &[u64],
) -> Result<u64> {
    require!(
        token_ids.len() == amounts.len() && balances.len() == token_ids.len(),
        FragmentError::LengthMismatch
    );

    let mut debited = Vec::with_capacity(token_ids.len());
    let mut total: u64 = 0;

    for (i, ((info, &token_id), &amount)) in balances.iter().zip(token_ids).zip(amounts).enumerate() {
        require!(
            !token_ids[..i].contains(&token_id),
            FragmentError::DuplicateTokenId
        );
        require!(info.is_writable, FragmentError::BalanceNotWritable);
        require!(amount > 0, FragmentError::ZeroAmount);

        let mut balance = FragmentBalance::load(info, holder, token_id)?
            .ok_or(FragmentError::InsufficientBalance)?;
        balance.debit(amount)?;

        total = total.checked_add(amount).ok_or(FragmentError::Overflow)?;
        debited.push(balance);
    }

    for (info, balance) in balances.iter().zip(&debited) {
        store_record(info, balance)?;
    }

    Ok(total)
}
