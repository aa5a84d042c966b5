//! Associated token accounts.
//!
//! The associated token account (ATA) of a wallet for a mint is a
//! program-derived address with seeds `[wallet, token_program_id, mint]`
//! under the associated token account program.

use sol_core::{find_program_address, AccountMeta, Address, Instruction};

use crate::error::ProgramError;
use crate::registry::ProgramRegistry;

/// Derive the associated token account address for a wallet and mint.
pub fn derive_associated_token_address(
    registry: &ProgramRegistry,
    wallet: &Address,
    mint: &Address,
) -> Result<Address, ProgramError> {
    let (address, _bump) = find_program_address(
        &[
            wallet.as_ref(),
            registry.token_program_id.as_ref(),
            mint.as_ref(),
        ],
        &registry.associated_token_program_id,
    )?;
    Ok(address)
}

/// Build an instruction creating the associated token account of `owner`
/// for `mint`, funded by `payer`. Returns the instruction together with the
/// derived account address.
///
/// # Arguments
///
/// * `payer` - Funds the new account (signer, writable).
/// * `owner` - The wallet the account is derived for.
/// * `mint` - The token mint.
pub fn create_associated_token_account(
    registry: &ProgramRegistry,
    payer: &Address,
    owner: &Address,
    mint: &Address,
) -> Result<(Instruction, Address), ProgramError> {
    let associated = derive_associated_token_address(registry, owner, mint)?;

    let accounts = vec![
        AccountMeta::writable(*payer, true),
        AccountMeta::writable(associated, false),
        AccountMeta::readonly(*owner, false),
        AccountMeta::readonly(*mint, false),
        AccountMeta::readonly(registry.system_program_id, false),
        AccountMeta::readonly(registry.token_program_id, false),
        AccountMeta::readonly(registry.rent_sysvar_id, false),
    ];

    tracing::debug!(%owner, %mint, %associated, "built associated token account create");
    Ok((
        Instruction::new(registry.associated_token_program_id, accounts, Vec::new()),
        associated,
    ))
}
