use {
    crate::{
        constants::{ESCROW_SEED, PARTICIPANT_SEED, SALE_STATE_SEED, TOKEN_POOL_SEED},
        instructions::SaleError,
        state::{Participant, SaleState},
    },
    anchor_lang::{prelude::*, system_program::{self, Transfer}},
    anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked},
};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,

    #[account(mut, seeds = [ESCROW_SEED], bump)]
    pub escrow: SystemAccount<'info>,

    // Closed unconditionally on success; a second claim fails because the
    // entry no longer exists.
    #[account(
        mut,
        close = participant,
        seeds = [PARTICIPANT_SEED, participant.key().as_ref()], bump,
        constraint = entry.owner == participant.key() @ SaleError::Unauthorized,
    )]
    pub entry: Account<'info, Participant>,

    #[account(
        mut,
        seeds = [TOKEN_POOL_SEED, token_mint.key().as_ref()], bump,
        constraint = token_pool.mint == token_mint.key() @ SaleError::MintMismatch,
    )]
    pub token_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = participant_token_account.mint == token_mint.key() @ SaleError::MintMismatch,
        constraint = participant_token_account.owner == participant.key() @ SaleError::Unauthorized,
    )]
    pub participant_token_account: Account<'info, TokenAccount>,

    #[account(constraint = token_mint.key() == state.token_mint @ SaleError::MintMismatch)]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

// The entry account is closed on every successful path, which is the sole
// mechanism preventing double settlement.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let state = &ctx.accounts.state;
    let entry = &ctx.accounts.entry;
    require!(state.ended, SaleError::PhaseViolation);

    if entry.cancelled {
        refund_participant(&ctx, entry.amount)?;

        let state = &mut ctx.accounts.state;
        state.total_cancelled = state
            .total_cancelled
            .checked_sub(ctx.accounts.entry.amount)
            .ok_or(SaleError::MathOverflow)?;
    } else if entry.amount > 0 {
        let share = token_allocation(entry.amount, state.total_tokens, state.total_contributed)?;
        if share > 0 {
            require!(
                ctx.accounts.token_pool.amount >= share,
                SaleError::InsufficientEscrow
            );
            transfer_tokens_to_participant(&ctx, share)?;
        }
    }
    // A never-funded entry settles to nothing; it is still closed.

    Ok(())
}

fn refund_participant(ctx: &Context<Claim>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.escrow.lamports() >= amount,
        SaleError::InsufficientEscrow
    );

    let bump = ctx.bumps.escrow;
    let bump_bytes = [bump];
    let seeds: [&[u8]; 2] = [ESCROW_SEED, &bump_bytes];
    let signer = [&seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow.to_account_info(),
            to: ctx.accounts.participant.to_account_info(),
        },
        &signer,
    );
    system_program::transfer(cpi_context, amount)?;

    Ok(())
}

fn transfer_tokens_to_participant(ctx: &Context<Claim>, share: u64) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.token_pool.to_account_info(),
        to: ctx.accounts.participant_token_account.to_account_info(),
        authority: ctx.accounts.state.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
    };

    let bump = ctx.bumps.state;
    let bump_bytes = [bump];
    let seeds: [&[u8]; 2] = [SALE_STATE_SEED, &bump_bytes];
    let signer = [&seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        &signer,
    );
    token::transfer_checked(cpi_context, share, ctx.accounts.token_mint.decimals)?;

    Ok(())
}

// floor(amount * total_tokens / total_contributed), widened to u128 so the
// product cannot overflow. Truncation dust stays in the pool.
pub(crate) fn token_allocation(amount: u64, total_tokens: u64, total_contributed: u64) -> Result<u64> {
    let share = (amount as u128)
        .checked_mul(total_tokens as u128)
        .ok_or(SaleError::MathOverflow)?
        .checked_div(total_contributed as u128)
        .ok_or(SaleError::DivisionByZero)?;

    // amount <= total_contributed, so the share fits in u64.
    Ok(share as u64)
}
