use {
    crate::{
        constants::{SALE_STATE_SEED, TOKEN_POOL_SEED},
        instructions::SaleError,
        state::SaleState,
    },
    anchor_lang::prelude::*,
    anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked},
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub token_provider: Signer<'info>,

    #[account(mut, seeds = [SALE_STATE_SEED], bump)]
    pub state: Account<'info, SaleState>,

    #[account(
        init_if_needed,
        payer = token_provider,
        seeds = [TOKEN_POOL_SEED, token_mint.key().as_ref()], bump,
        token::mint = token_mint,
        token::authority = state,
    )]
    pub token_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_account.mint == token_mint.key() @ SaleError::MintMismatch,
        constraint = provider_token_account.owner == token_provider.key() @ SaleError::Unauthorized,
    )]
    pub provider_token_account: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(
        ctx.accounts.token_provider.key() == state.token_provider,
        SaleError::Unauthorized
    );
    require!(!state.ended, SaleError::PhaseViolation);
    require!(amount > 0, SaleError::ZeroAmount);

    bind_mint(state, ctx.accounts.token_mint.key())?;

    state.total_tokens = state
        .total_tokens
        .checked_add(amount)
        .ok_or(SaleError::MathOverflow)?;

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.provider_token_account.to_account_info(),
        to: ctx.accounts.token_pool.to_account_info(),
        authority: ctx.accounts.token_provider.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer_checked(cpi_ctx, amount, ctx.accounts.token_mint.decimals)?;

    msg!(
        "tokens deposited; amount: {}, total tokens: {}, token mint: {}",
        amount,
        state.total_tokens,
        state.token_mint
    );

    Ok(())
}

// First deposit binds the mint; every later deposit must use the same one.
pub(crate) fn bind_mint(state: &mut SaleState, mint: Pubkey) -> Result<()> {
    if state.token_mint == Pubkey::default() {
        state.token_mint = mint;
    } else {
        require!(state.token_mint == mint, SaleError::MintMismatch);
    }
    Ok(())
}
