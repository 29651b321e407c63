use {
    crate::{
        constants::{ESCROW_SEED, SALE_STATE_SEED},
        instructions::SaleError,
        state::SaleState,
    },
    anchor_lang::{prelude::*, system_program::{self, Transfer}},
};

#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,

    #[account(mut, seeds = [ESCROW_SEED], bump)]
    pub escrow: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

// Forwards everything above the refund reserve to the beneficiary. Post:
// escrow holds exactly what not-yet-settled cancelled entries are owed.
pub fn distribute(ctx: Context<Distribute>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        ctx.accounts.beneficiary.key() == state.beneficiary,
        SaleError::Unauthorized
    );
    require!(state.ended, SaleError::PhaseViolation);

    let escrow_lamports = ctx.accounts.escrow.lamports();
    let amount = distributable_amount(escrow_lamports, state.total_cancelled)?;
    if amount == 0 {
        return Ok(());
    }

    state.recipient_lamports = state
        .recipient_lamports
        .checked_add(amount)
        .ok_or(SaleError::MathOverflow)?;

    let bump = ctx.bumps.escrow;
    let bump_bytes = [bump];
    let seeds: [&[u8]; 2] = [ESCROW_SEED, &bump_bytes];
    let signer = [&seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow.to_account_info(),
            to: ctx.accounts.beneficiary.to_account_info(),
        },
        &signer,
    );
    system_program::transfer(cpi_context, amount)?;

    msg!(
        "proceeds distributed; beneficiary: {}, amount: {}, reserved for refunds: {}",
        state.beneficiary,
        amount,
        state.total_cancelled
    );

    Ok(())
}

pub(crate) fn distributable_amount(escrow_lamports: u64, total_cancelled: u64) -> Result<u64> {
    require!(escrow_lamports >= total_cancelled, SaleError::InsufficientEscrow);
    Ok(escrow_lamports - total_cancelled)
}
