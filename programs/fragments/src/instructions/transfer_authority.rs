use anchor_lang::prelude::*;
use ledger_core::AuthorityTransferred;

use crate::state::FragmentLedger;

#[derive(Accounts)]
pub struct TransferLedgerAuthority<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [FragmentLedger::SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, FragmentLedger>,
}

pub fn handler(ctx: Context<TransferLedgerAuthority>, new_holder: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let previous = ledger
        .authority
        .transfer(&ctx.accounts.holder.key(), new_holder)?;

    emit!(AuthorityTransferred {
        ledger: ledger.key(),
        previous,
        new_holder,
    });

    msg!("Fragment ledger authority moved from {} to {}", previous, new_holder);

    Ok(())
}
