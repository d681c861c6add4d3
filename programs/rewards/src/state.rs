use anchor_lang::prelude::*;
use fragments::FragmentBalance;
use ledger_core::AuthoritySlot;

use crate::errors::RewardError;

// =============================================================================
// REWARD MANAGER STATE
// =============================================================================
//
// Fragment token ids are derived, not stored:
//
//     token_id = template_id * FRAGMENT_STRIDE + slot_index
//
// so every template owns a disjoint block of FRAGMENT_STRIDE ids on the
// fragment ledger. Issuance walks the slots round-robin with one counter per
// template. The counter has a single writer: the manager's authority holder.
// =============================================================================

/// Token id block reserved per template
pub const FRAGMENT_STRIDE: u64 = 100;

/// Maximum fragments per template.
///
/// Bounded by the redeem transaction: one balance account and 16 bytes of
/// arguments per fragment must fit a v0 message whose accounts come from an
/// address lookup table. Above 15 fragments a legacy message no longer fits.
pub const MAX_FRAGMENTS: usize = 54;

/// Maximum length of a final or fragment reference in bytes
pub const MAX_REF_LEN: usize = 96;

const _: () = assert!((MAX_FRAGMENTS as u64) < FRAGMENT_STRIDE);

/// Derive the fragment ledger token id for a template slot
pub fn fragment_token_id(template_id: u64, slot_index: u16) -> Result<u64> {
    template_id
        .checked_mul(FRAGMENT_STRIDE)
        .and_then(|base| base.checked_add(slot_index as u64))
        .ok_or_else(|| error!(RewardError::Overflow))
}

#[account]
pub struct RewardManager {
    /// The reward slot (model registry PDA once bootstrapped)
    pub authority: AuthoritySlot,
    /// Fragment ledger configuration account
    pub fragment_ledger: Pubkey,
    /// Completion ledger configuration account
    pub completion_ledger: Pubkey,
    /// Value token used as price denomination (informational)
    pub value_token: Pubkey,
    /// Templates created so far; also the next template id
    pub template_count: u64,
    /// Successful redemptions across all templates
    pub total_redemptions: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl RewardManager {
    pub const SEED: &'static [u8] = b"reward_manager";

    pub const SIZE: usize = 8 +  // discriminator
        AuthoritySlot::SIZE +    // authority
        32 +                     // fragment_ledger
        32 +                     // completion_ledger
        32 +                     // value_token
        8 +                      // template_count
        8 +                      // total_redemptions
        1;                       // bump

    pub fn next_template_id(&mut self) -> Result<u64> {
        let id = self.template_count;
        self.template_count = id.checked_add(1).ok_or(RewardError::Overflow)?;
        Ok(id)
    }

    pub fn record_redemption(&mut self) -> Result<()> {
        self.total_redemptions = self
            .total_redemptions
            .checked_add(1)
            .ok_or(RewardError::Overflow)?;
        Ok(())
    }
}

#[account]
pub struct RewardTemplate {
    pub template_id: u64,
    /// Who registered the template
    pub creator: Pubkey,
    /// Reference minted into the completion token on redemption
    pub final_ref: String,
    /// One reference per slot; fixed at creation
    pub fragment_refs: Vec<String>,
    pub fragment_count: u16,
    /// Fragments issued so far; drives round-robin slot selection
    pub issued_count: u64,
    pub redeemed_count: u64,
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl RewardTemplate {
    pub const SEED: &'static [u8] = b"reward_template";

    /// Account space for a template. Inputs are clamped to the template limits so
    /// oversized requests reach `validate` instead of failing account creation.
    pub fn space(final_ref: &str, fragment_refs: &[String]) -> usize {
        let refs: usize = fragment_refs
            .iter()
            .take(MAX_FRAGMENTS)
            .map(|r| 4 + r.len().min(MAX_REF_LEN))
            .sum();

        8 +                                     // discriminator
            8 +                                 // template_id
            32 +                                // creator
            4 + final_ref.len().min(MAX_REF_LEN) + // final_ref
            4 + refs +                          // fragment_refs
            2 +                                 // fragment_count
            8 +                                 // issued_count
            8 +                                 // redeemed_count
            8 +                                 // created_at
            1                                   // bump
    }

    pub fn validate(final_ref: &str, fragment_refs: &[String]) -> Result<()> {
        require!(!fragment_refs.is_empty(), RewardError::EmptyTemplate);
        require!(fragment_refs.len() <= MAX_FRAGMENTS, RewardError::TooManyFragments);
        require!(final_ref.len() <= MAX_REF_LEN, RewardError::RefTooLong);
        require!(
            fragment_refs.iter().all(|r| r.len() <= MAX_REF_LEN),
            RewardError::RefTooLong
        );
        Ok(())
    }

    /// Slot the next `reward_fragment` call will issue
    pub fn next_slot(&self) -> u16 {
        (self.issued_count % self.fragment_count as u64) as u16
    }

    pub fn next_token_id(&self) -> Result<u64> {
        fragment_token_id(self.template_id, self.next_slot())
    }

    pub fn record_issue(&mut self) -> Result<()> {
        self.issued_count = self
            .issued_count
            .checked_add(1)
            .ok_or(RewardError::Overflow)?;
        Ok(())
    }

    pub fn record_redemption(&mut self) -> Result<()> {
        self.redeemed_count = self
            .redeemed_count
            .checked_add(1)
            .ok_or(RewardError::Overflow)?;
        Ok(())
    }

    /// Every fragment token id of this template, in slot order
    pub fn full_set(&self) -> Result<Vec<u64>> {
        (0..self.fragment_count)
            .map(|slot| fragment_token_id(self.template_id, slot))
            .collect()
    }

    /// A redemption must name each slot exactly once, in any order, with amount 1
    pub fn check_redemption(&self, token_ids: &[u64], amounts: &[u64]) -> Result<()> {
        require!(
            token_ids.len() == self.fragment_count as usize && amounts.len() == token_ids.len(),
            RewardError::IncompleteSet
        );
        require!(amounts.iter().all(|&a| a == 1), RewardError::IncompleteSet);

        let mut listed = token_ids.to_vec();
        listed.sort_unstable();
        require!(listed == self.full_set()?, RewardError::IncompleteSet);

        Ok(())
    }
}

/// Confirm `holder` owns at least `amounts[i]` of `token_ids[i]` for every i,
/// reading the fragment ledger's balance accounts without modifying them.
pub fn check_holdings(
    balances: &[AccountInfo],
    holder: &Pubkey,
    token_ids: &[u64],
    amounts: &[u64],
) -> Result<()> {
    require!(
        balances.len() == token_ids.len() && amounts.len() == token_ids.len(),
        RewardError::LengthMismatch
    );

    for ((info, &token_id), &amount) in balances.iter().zip(token_ids).zip(amounts) {
        let held = FragmentBalance::load(info, holder, token_id)?
            .map(|b| b.amount)
            .unwrap_or(0);
        require!(held >= amount, RewardError::InsufficientBalance);
    }

    Ok(())
}
