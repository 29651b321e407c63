use {
    crate::{
        constants::{ESCROW_SEED, SALE_STATE_SEED},
        instructions::SaleError,
        state::SaleState,
    },
    anchor_lang::{prelude::*, system_program::{self, Transfer}},
};

#[derive(Accounts)]
pub struct Safeguard<'info> {
    pub token_provider: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,

    #[account(mut, seeds = [ESCROW_SEED], bump)]
    pub escrow: SystemAccount<'info>,

    /// CHECK: Verified against the address recorded in the sale state.
    #[account(mut, constraint = safeguard_account.key() == state.safeguard_account @ SaleError::Unauthorized)]
    pub safeguard_account: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn safeguard(ctx: Context<Safeguard>) -> Result<()> {
    let state = &ctx.accounts.state;
    require!(
        ctx.accounts.token_provider.key() == state.token_provider,
        SaleError::Unauthorized
    );

    let amount = safeguardable_amount(
        ctx.accounts.escrow.lamports(),
        state.total_cancelled,
        state.total_contributed,
    );
    if amount == 0 {
        msg!("nothing to safeguard beyond the refund reserve");
        return Ok(());
    }

    let bump = ctx.bumps.escrow;
    let bump_bytes = [bump];
    let seeds: [&[u8]; 2] = [ESCROW_SEED, &bump_bytes];
    let signer = [&seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow.to_account_info(),
            to: ctx.accounts.safeguard_account.to_account_info(),
        },
        &signer,
    );
    system_program::transfer(cpi_context, amount)?;

    msg!(
        "funds safeguarded; amount: {}, safeguard account: {}, refund reserve: {}",
        amount,
        ctx.accounts.safeguard_account.key(),
        state.total_cancelled
    );

    Ok(())
}

// The currently active raised amount, clamped so the refund reserve is never
// touched. Repeat calls with nothing left above the reserve yield zero.
pub(crate) fn safeguardable_amount(
    escrow_lamports: u64,
    total_cancelled: u64,
    total_contributed: u64,
) -> u64 {
    escrow_lamports
        .saturating_sub(total_cancelled)
        .min(total_contributed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_active_raise_and_leaves_reserve() {
        // 100.5 SOL in escrow, 0.5 SOL cancelled, 100 SOL active.
        assert_eq!(
            safeguardable_amount(100_500_000_000, 500_000_000, 100_000_000_000),
            100_000_000_000
        );
    }

    #[test]
    fn repeat_call_is_a_noop() {
        // After the first safeguard only the reserve remains.
        assert_eq!(safeguardable_amount(500_000_000, 500_000_000, 100_000_000_000), 0);
    }

    #[test]
    fn never_dips_into_reserve() {
        // Escrow below the reserve (should not happen, but must not underflow).
        assert_eq!(safeguardable_amount(400_000_000, 500_000_000, 100_000_000_000), 0);
    }
}
