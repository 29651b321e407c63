#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod state;


use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod token_sale {
    use super::*;

    pub fn init(
        ctx: Context<Initialize>,
        token_provider: Pubkey,
        beneficiary: Pubkey,
        safeguard_account: Pubkey,
    ) -> Result<()> {
        instructions::initialize::init(ctx, token_provider, beneficiary, safeguard_account)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    pub fn activate(ctx: Context<Activate>, duration_seconds: u64) -> Result<()> {
        instructions::activate::activate(ctx, duration_seconds)
    }

    pub fn init_participant(ctx: Context<InitParticipant>) -> Result<()> {
        instructions::init_participant::init_participant(ctx)
    }

    pub fn participate(ctx: Context<Participate>, amount: u64) -> Result<()> {
        instructions::participate::participate(ctx, amount)
    }

    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::cancel(ctx)
    }

    pub fn safeguard(ctx: Context<Safeguard>) -> Result<()> {
        instructions::safeguard::safeguard(ctx)
    }

    pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
        instructions::finalize::finalize(ctx)
    }

    pub fn distribute(ctx: Context<Distribute>) -> Result<()> {
        instructions::distribute::distribute(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }
}
