use {
    crate::{constants::{RAISE_CAP, SALE_STATE_SEED}, instructions::SaleError, state::SaleState},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + SaleState::INIT_SPACE,
        seeds = [SALE_STATE_SEED], bump,
    )]
    pub state: Account<'info, SaleState>,

    pub system_program: Program<'info, System>,
}

pub fn init(
    ctx: Context<Initialize>,
    token_provider: Pubkey,
    beneficiary: Pubkey,
    safeguard_account: Pubkey,
) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(!state.initialized, SaleError::AlreadyInitialized);

    state.initialized = true;
    state.token_provider = token_provider;
    state.beneficiary = beneficiary;
    state.safeguard_account = safeguard_account;
    state.raise_cap = RAISE_CAP;

    msg!(
        "sale initialized; token provider: {}, beneficiary: {}, safeguard account: {}, raise cap: {}",
        token_provider,
        beneficiary,
        safeguard_account,
        state.raise_cap
    );

    Ok(())
}
