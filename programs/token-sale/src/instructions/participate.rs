use {
    crate::{
        constants::{ESCROW_SEED, LARGE_INVESTOR_THRESHOLD, MAX_CONTRIBUTION, PARTICIPANT_SEED, SALE_STATE_SEED},
        instructions::SaleError,
        state::{Participant, SaleState},
    },
    anchor_lang::{prelude::*, system_program::{self, Transfer}},
};

#[derive(Accounts)]
pub struct Participate<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,

    #[account(mut, seeds = [ESCROW_SEED], bump)]
    pub escrow: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()], bump,
        constraint = entry.owner == participant.key() @ SaleError::Unauthorized,
    )]
    pub entry: Account<'info, Participant>,

    pub system_program: Program<'info, System>,
}

pub fn participate(ctx: Context<Participate>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp as u64;

    check_window(&ctx.accounts.state, now)?;
    apply_contribution(&mut ctx.accounts.state, &mut ctx.accounts.entry, amount, now)?;

    let cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.participant.to_account_info(),
            to: ctx.accounts.escrow.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)?;

    Ok(())
}

pub(crate) fn check_window(state: &SaleState, now: u64) -> Result<()> {
    require!(state.participation_active, SaleError::PhaseViolation);
    require!(!state.ended, SaleError::PhaseViolation);
    require!(now < state.participation_end, SaleError::PhaseViolation);

    Ok(())
}

pub(crate) fn apply_contribution(
    state: &mut SaleState,
    entry: &mut Participant,
    amount: u64,
    now: u64,
) -> Result<()> {
    require!(amount > 0, SaleError::ZeroAmount);
    require!(!entry.cancelled, SaleError::AlreadyCancelled);

    let new_total = state
        .total_contributed
        .checked_add(amount)
        .ok_or(SaleError::MathOverflow)?;
    require!(new_total <= state.raise_cap, SaleError::RaiseCapExceeded);

    let new_position = entry
        .amount
        .checked_add(amount)
        .ok_or(SaleError::MathOverflow)?;
    require!(new_position <= MAX_CONTRIBUTION, SaleError::MaxContributionExceeded);

    // Zero-to-nonzero transition only; top-ups must not double-count.
    if entry.amount == 0 {
        state.unique_investor_count += 1;
        state.active_early_investor_count += 1;
    }
    entry.is_early_investor = true;

    if !entry.is_large_investor && new_position >= LARGE_INVESTOR_THRESHOLD {
        entry.is_large_investor = true;
        state.large_investor_count += 1;
    }

    entry.amount = new_position;
    entry.contributed_at = now;
    state.total_contributed = new_total;

    Ok(())
}
