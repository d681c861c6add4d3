use anchor_lang::prelude::*;
use ledger_core::AuthoritySlot;

use crate::errors::TokenError;

// =============================================================================
// VALUE TOKEN STATE
// =============================================================================
//
// Supply is minted once to the deployer at initialize and only moves between
// balances afterwards. The authority slot has no privileged instruction of its
// own; it is kept so the token takes part in the same bootstrap handover as
// the other ledgers.
// =============================================================================

#[account]
pub struct ValueToken {
    pub authority: AuthoritySlot,
    /// Fixed at initialize
    pub total_supply: u64,
    pub decimals: u8,
    /// PDA bump seed
    pub bump: u8,
}

impl ValueToken {
    pub const SEED: &'static [u8] = b"value_token";

    pub const SIZE: usize = 8 +  // discriminator
        AuthoritySlot::SIZE +    // authority
        8 +                      // total_supply
        1 +                      // decimals
        1;                       // bump
}

#[account]
pub struct TokenBalance {
    pub owner: Pubkey,
    pub amount: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl TokenBalance {
    pub const SEED: &'static [u8] = b"token_balance";

    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

/// Move `amount` from one balance to another.
///
/// Both sides are computed before either is written. A transfer to self is a
/// no-op once the balance check passes.
pub fn move_balance(from: &mut TokenBalance, to: &mut TokenBalance, amount: u64) -> Result<()> {
    require!(amount > 0, TokenError::ZeroAmount);

    let from_after = from
        .amount
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientBalance)?;
    if from.owner == to.owner {
        return Ok(());
    }
    let to_after = to
        .amount
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    from.amount = from_after;
    to.amount = to_after;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
        }
    }

    fn holding(amount: u64) -> TokenBalance {
        TokenBalance {
            owner: Pubkey::new_unique(),
            amount,
            bump: 255,
        }
    }

    #[test]
    fn transfer_conserves_supply() {
        let mut alice = holding(1_000);
        let mut bob = holding(0);

        move_balance(&mut alice, &mut bob, 400).unwrap();
        assert_eq!(alice.amount, 600);
        assert_eq!(bob.amount, 400);
        assert_eq!(alice.amount + bob.amount, 1_000);
    }

    #[test]
    fn overdraw_leaves_both_sides_untouched() {
        let mut alice = holding(10);
        let mut bob = holding(5);

        let err = move_balance(&mut alice, &mut bob, 11).unwrap_err();
        assert_eq!(code(err), u32::from(TokenError::InsufficientBalance));
        assert_eq!(alice.amount, 10);
        assert_eq!(bob.amount, 5);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut alice = holding(10);
        let mut bob = holding(0);

        let err = move_balance(&mut alice, &mut bob, 0).unwrap_err();
        assert_eq!(code(err), u32::from(TokenError::ZeroAmount));
    }

    #[test]
    fn overflowing_credit_is_rejected() {
        let mut alice = holding(10);
        let mut bob = holding(u64::MAX);

        let err = move_balance(&mut alice, &mut bob, 1).unwrap_err();
        assert_eq!(code(err), u32::from(TokenError::Overflow));
        assert_eq!(alice.amount, 10);
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut alice = holding(10);
        let mut same = TokenBalance {
            owner: alice.owner,
            amount: alice.amount,
            bump: alice.bump,
        };

        move_balance(&mut alice, &mut same, 4).unwrap();
        assert_eq!(alice.amount, 10);
    }
}
