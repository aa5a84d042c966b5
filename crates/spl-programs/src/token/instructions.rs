//! SPL Token instruction builders and decoders.
//!
//! Instructions that need an authority accept an optional list of multisig
//! signers. With no signers the authority itself signs. With signers the
//! authority is the multisig account, passed as a non-signer, and each signer
//! follows it as a read-only signer.

use sol_core::{AccountMeta, Address, Instruction};

use crate::error::ProgramError;
use crate::registry::ProgramRegistry;
use crate::token::layout::{AuthorityType, TokenInstruction, TokenInstructionType};
use crate::validate::{
    account_at, accounts_from, check_account_count, check_program_id, AccountCount,
};

/// Most signers a multisig account can list.
pub const MAX_SIGNERS: usize = 11;

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeMintParams {
    pub mint: Address,
    pub decimals: u8,
    pub mint_authority: Address,
    pub freeze_authority: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeAccountParams {
    pub account: Address,
    pub mint: Address,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeMultisigParams {
    pub multisig: Address,
    /// Number of signatures required.
    pub m: u8,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub source: Address,
    pub dest: Address,
    pub owner: Address,
    pub amount: u64,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveParams {
    pub source: Address,
    pub delegate: Address,
    pub owner: Address,
    pub amount: u64,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeParams {
    pub source: Address,
    pub owner: Address,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAuthorityParams {
    /// The mint or token account whose authority changes.
    pub account: Address,
    pub authority_type: AuthorityType,
    /// `None` removes the authority.
    pub new_authority: Option<Address>,
    pub current_authority: Address,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintToParams {
    pub mint: Address,
    pub dest: Address,
    pub mint_authority: Address,
    pub amount: u64,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnParams {
    pub account: Address,
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseAccountParams {
    pub account: Address,
    /// Receives the remaining lamports.
    pub dest: Address,
    pub owner: Address,
    pub signers: Vec<Address>,
}

/// Shared by `FreezeAccount` and `ThawAccount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreezeAccountParams {
    pub account: Address,
    pub mint: Address,
    /// The mint's freeze authority.
    pub authority: Address,
    pub signers: Vec<Address>,
}

pub type ThawAccountParams = FreezeAccountParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCheckedParams {
    pub source: Address,
    pub mint: Address,
    pub dest: Address,
    pub owner: Address,
    pub amount: u64,
    pub decimals: u8,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveCheckedParams {
    pub source: Address,
    pub mint: Address,
    pub delegate: Address,
    pub owner: Address,
    pub amount: u64,
    pub decimals: u8,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintToCheckedParams {
    pub mint: Address,
    pub dest: Address,
    pub mint_authority: Address,
    pub amount: u64,
    pub decimals: u8,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnCheckedParams {
    pub account: Address,
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
    pub decimals: u8,
    pub signers: Vec<Address>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn check_signer_count(signers: &[Address]) -> Result<(), ProgramError> {
    if signers.len() > MAX_SIGNERS {
        tracing::warn!(signers = signers.len(), "too many multisig signers");
        return Err(ProgramError::Constraint(format!(
            "{} multisig signers supplied, maximum is {MAX_SIGNERS}",
            signers.len()
        )));
    }
    Ok(())
}

/// Append the authority, and any multisig signers after it.
fn push_authority(
    accounts: &mut Vec<AccountMeta>,
    authority: Address,
    signers: &[Address],
) -> Result<(), ProgramError> {
    check_signer_count(signers)?;
    if signers.is_empty() {
        accounts.push(AccountMeta::readonly(authority, true));
    } else {
        accounts.push(AccountMeta::readonly(authority, false));
        accounts.extend(signers.iter().map(|s| AccountMeta::readonly(*s, true)));
    }
    Ok(())
}

fn build(
    registry: &ProgramRegistry,
    instruction: TokenInstruction,
    accounts: Vec<AccountMeta>,
) -> Instruction {
    tracing::debug!(
        program = %registry.token_program_id,
        instruction = %instruction.instruction_type(),
        accounts = accounts.len(),
        "built token instruction"
    );
    Instruction::new(registry.token_program_id, accounts, instruction.pack())
}

/// Build an `InitializeMint` instruction.
///
/// Carries no signer, so it must share a transaction with the system
/// instruction that creates `mint`.
pub fn initialize_mint(
    registry: &ProgramRegistry,
    params: &InitializeMintParams,
) -> Result<Instruction, ProgramError> {
    let accounts = vec![
        AccountMeta::writable(params.mint, false),
        AccountMeta::readonly(registry.rent_sysvar_id, false),
    ];
    let ix = TokenInstruction::InitializeMint {
        decimals: params.decimals,
        mint_authority: params.mint_authority,
        freeze_authority: params.freeze_authority,
    };
    Ok(build(registry, ix, accounts))
}

/// Build an `InitializeAccount` instruction.
pub fn initialize_account(
    registry: &ProgramRegistry,
    params: &InitializeAccountParams,
) -> Result<Instruction, ProgramError> {
    let accounts = vec![
        AccountMeta::writable(params.account, false),
        AccountMeta::readonly(params.mint, false),
        AccountMeta::readonly(params.owner, false),
        AccountMeta::readonly(registry.rent_sysvar_id, false),
    ];
    Ok(build(registry, TokenInstruction::InitializeAccount, accounts))
}

/// Build an `InitializeMultisig` instruction.
///
/// `m` must be between 1 and the number of signers, and at most
/// [`MAX_SIGNERS`] signers may be listed.
pub fn initialize_multisig(
    registry: &ProgramRegistry,
    params: &InitializeMultisigParams,
) -> Result<Instruction, ProgramError> {
    check_signer_count(&params.signers)?;
    if params.m == 0 || usize::from(params.m) > params.signers.len() {
        tracing::warn!(m = params.m, signers = params.signers.len(), "multisig rejected");
        return Err(ProgramError::Constraint(format!(
            "multisig threshold {} must be between 1 and {} signers",
            params.m,
            params.signers.len()
        )));
    }

    let mut accounts = vec![
        AccountMeta::writable(params.multisig, false),
        AccountMeta::readonly(registry.rent_sysvar_id, false),
    ];
    accounts.extend(params.signers.iter().map(|s| AccountMeta::readonly(*s, false)));
    Ok(build(registry, TokenInstruction::InitializeMultisig { m: params.m }, accounts))
}

/// Build a `Transfer` instruction moving `amount` base units between token
/// accounts of the same mint.
///
/// # Wire format
///
/// Tag 3 followed by the u64 LE amount. Total data: 9 bytes.
pub fn transfer(
    registry: &ProgramRegistry,
    params: &TransferParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.source, false),
        AccountMeta::writable(params.dest, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    let ix = TokenInstruction::Transfer {
        amount: params.amount,
    };
    Ok(build(registry, ix, accounts))
}

pub fn approve(
    registry: &ProgramRegistry,
    params: &ApproveParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.source, false),
        AccountMeta::readonly(params.delegate, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    let ix = TokenInstruction::Approve {
        amount: params.amount,
    };
    Ok(build(registry, ix, accounts))
}

pub fn revoke(
    registry: &ProgramRegistry,
    params: &RevokeParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![AccountMeta::writable(params.source, false)];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    Ok(build(registry, TokenInstruction::Revoke, accounts))
}

pub fn set_authority(
    registry: &ProgramRegistry,
    params: &SetAuthorityParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![AccountMeta::writable(params.account, false)];
    push_authority(&mut accounts, params.current_authority, &params.signers)?;
    let ix = TokenInstruction::SetAuthority {
        authority_type: params.authority_type,
        new_authority: params.new_authority,
    };
    Ok(build(registry, ix, accounts))
}

pub fn mint_to(
    registry: &ProgramRegistry,
    params: &MintToParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.mint, false),
        AccountMeta::writable(params.dest, false),
    ];
    push_authority(&mut accounts, params.mint_authority, &params.signers)?;
    let ix = TokenInstruction::MintTo {
        amount: params.amount,
    };
    Ok(build(registry, ix, accounts))
}

pub fn burn(registry: &ProgramRegistry, params: &BurnParams) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.account, false),
        AccountMeta::writable(params.mint, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    let ix = TokenInstruction::Burn {
        amount: params.amount,
    };
    Ok(build(registry, ix, accounts))
}

/// Build a `CloseAccount` instruction. Non-native accounts must hold zero
/// tokens for the program to accept it.
pub fn close_account(
    registry: &ProgramRegistry,
    params: &CloseAccountParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.account, false),
        AccountMeta::writable(params.dest, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    Ok(build(registry, TokenInstruction::CloseAccount, accounts))
}

fn freeze_or_thaw(
    registry: &ProgramRegistry,
    params: &FreezeAccountParams,
    instruction: TokenInstruction,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.account, false),
        AccountMeta::readonly(params.mint, false),
    ];
    push_authority(&mut accounts, params.authority, &params.signers)?;
    Ok(build(registry, instruction, accounts))
}

pub fn freeze_account(
    registry: &ProgramRegistry,
    params: &FreezeAccountParams,
) -> Result<Instruction, ProgramError> {
    freeze_or_thaw(registry, params, TokenInstruction::FreezeAccount)
}

pub fn thaw_account(
    registry: &ProgramRegistry,
    params: &ThawAccountParams,
) -> Result<Instruction, ProgramError> {
    freeze_or_thaw(registry, params, TokenInstruction::ThawAccount)
}

/// Build a `TransferChecked` instruction. The program rejects it unless
/// `mint` and `decimals` match the source account.
pub fn transfer_checked(
    registry: &ProgramRegistry,
    params: &TransferCheckedParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.source, false),
        AccountMeta::readonly(params.mint, false),
        AccountMeta::writable(params.dest, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    let ix = TokenInstruction::TransferChecked {
        amount: params.amount,
        decimals: params.decimals,
    };
    Ok(build(registry, ix, accounts))
}

pub fn approve_checked(
    registry: &ProgramRegistry,
    params: &ApproveCheckedParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.source, false),
        AccountMeta::readonly(params.mint, false),
        AccountMeta::readonly(params.delegate, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    let ix = TokenInstruction::ApproveChecked {
        amount: params.amount,
        decimals: params.decimals,
    };
    Ok(build(registry, ix, accounts))
}

pub fn mint_to_checked(
    registry: &ProgramRegistry,
    params: &MintToCheckedParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.mint, false),
        AccountMeta::writable(params.dest, false),
    ];
    push_authority(&mut accounts, params.mint_authority, &params.signers)?;
    let ix = TokenInstruction::MintToChecked {
        amount: params.amount,
        decimals: params.decimals,
    };
    Ok(build(registry, ix, accounts))
}

pub fn burn_checked(
    registry: &ProgramRegistry,
    params: &BurnCheckedParams,
) -> Result<Instruction, ProgramError> {
    let mut accounts = vec![
        AccountMeta::writable(params.account, false),
        AccountMeta::writable(params.mint, false),
    ];
    push_authority(&mut accounts, params.owner, &params.signers)?;
    let ix = TokenInstruction::BurnChecked {
        amount: params.amount,
        decimals: params.decimals,
    };
    Ok(build(registry, ix, accounts))
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

fn parse(
    registry: &ProgramRegistry,
    instruction: &Instruction,
    expected_accounts: AccountCount,
) -> Result<TokenInstruction, ProgramError> {
    check_program_id(instruction, &registry.token_program_id)?;
    check_account_count(instruction, expected_accounts)?;
    TokenInstruction::unpack(instruction.data())
}

/// Trailing multisig signers, held to the same limit the builders enforce.
fn signers_from(instruction: &Instruction, start: usize) -> Result<Vec<Address>, ProgramError> {
    let signers = accounts_from(instruction, start);
    check_signer_count(&signers)?;
    Ok(signers)
}

fn type_mismatch(expected: TokenInstructionType, found: &TokenInstruction) -> ProgramError {
    ProgramError::InstructionTypeMismatch {
        expected: expected.to_string(),
        found: found.instruction_type().to_string(),
    }
}

pub fn decode_initialize_mint(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<InitializeMintParams, ProgramError> {
    match parse(registry, instruction, AccountCount::Exactly(2))? {
        TokenInstruction::InitializeMint {
            decimals,
            mint_authority,
            freeze_authority,
        } => Ok(InitializeMintParams {
            mint: account_at(instruction, 0)?,
            decimals,
            mint_authority,
            freeze_authority,
        }),
        other => Err(type_mismatch(TokenInstructionType::InitializeMint, &other)),
    }
}

pub fn decode_initialize_account(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<InitializeAccountParams, ProgramError> {
    match parse(registry, instruction, AccountCount::Exactly(4))? {
        TokenInstruction::InitializeAccount => Ok(InitializeAccountParams {
            account: account_at(instruction, 0)?,
            mint: account_at(instruction, 1)?,
            owner: account_at(instruction, 2)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::InitializeAccount, &other)),
    }
}

/// Every account after the rent sysvar is a listed signer.
pub fn decode_initialize_multisig(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<InitializeMultisigParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(2))? {
        TokenInstruction::InitializeMultisig { m } => {
            check_account_count(instruction, AccountCount::AtLeast(2 + usize::from(m)))?;
            Ok(InitializeMultisigParams {
                multisig: account_at(instruction, 0)?,
                m,
                signers: signers_from(instruction, 2)?,
            })
        }
        other => Err(type_mismatch(TokenInstructionType::InitializeMultisig, &other)),
    }
}

pub fn decode_transfer(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<TransferParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::Transfer { amount } => Ok(TransferParams {
            source: account_at(instruction, 0)?,
            dest: account_at(instruction, 1)?,
            owner: account_at(instruction, 2)?,
            amount,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::Transfer, &other)),
    }
}

pub fn decode_approve(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<ApproveParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::Approve { amount } => Ok(ApproveParams {
            source: account_at(instruction, 0)?,
            delegate: account_at(instruction, 1)?,
            owner: account_at(instruction, 2)?,
            amount,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::Approve, &other)),
    }
}

pub fn decode_revoke(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<RevokeParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(2))? {
        TokenInstruction::Revoke => Ok(RevokeParams {
            source: account_at(instruction, 0)?,
            owner: account_at(instruction, 1)?,
            signers: signers_from(instruction, 2)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::Revoke, &other)),
    }
}

pub fn decode_set_authority(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<SetAuthorityParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(2))? {
        TokenInstruction::SetAuthority {
            authority_type,
            new_authority,
        } => Ok(SetAuthorityParams {
            account: account_at(instruction, 0)?,
            authority_type,
            new_authority,
            current_authority: account_at(instruction, 1)?,
            signers: signers_from(instruction, 2)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::SetAuthority, &other)),
    }
}

pub fn decode_mint_to(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<MintToParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::MintTo { amount } => Ok(MintToParams {
            mint: account_at(instruction, 0)?,
            dest: account_at(instruction, 1)?,
            mint_authority: account_at(instruction, 2)?,
            amount,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::MintTo, &other)),
    }
}

pub fn decode_burn(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<BurnParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::Burn { amount } => Ok(BurnParams {
            account: account_at(instruction, 0)?,
            mint: account_at(instruction, 1)?,
            owner: account_at(instruction, 2)?,
            amount,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::Burn, &other)),
    }
}

pub fn decode_close_account(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<CloseAccountParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::CloseAccount => Ok(CloseAccountParams {
            account: account_at(instruction, 0)?,
            dest: account_at(instruction, 1)?,
            owner: account_at(instruction, 2)?,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::CloseAccount, &other)),
    }
}

fn decode_freeze_or_thaw(
    registry: &ProgramRegistry,
    instruction: &Instruction,
    expected: TokenInstructionType,
) -> Result<FreezeAccountParams, ProgramError> {
    let decoded = parse(registry, instruction, AccountCount::AtLeast(3))?;
    if decoded.instruction_type() != expected {
        return Err(type_mismatch(expected, &decoded));
    }
    Ok(FreezeAccountParams {
        account: account_at(instruction, 0)?,
        mint: account_at(instruction, 1)?,
        authority: account_at(instruction, 2)?,
        signers: signers_from(instruction, 3)?,
    })
}

pub fn decode_freeze_account(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<FreezeAccountParams, ProgramError> {
    decode_freeze_or_thaw(registry, instruction, TokenInstructionType::FreezeAccount)
}

pub fn decode_thaw_account(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<ThawAccountParams, ProgramError> {
    decode_freeze_or_thaw(registry, instruction, TokenInstructionType::ThawAccount)
}

pub fn decode_transfer_checked(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<TransferCheckedParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(4))? {
        TokenInstruction::TransferChecked { amount, decimals } => Ok(TransferCheckedParams {
            source: account_at(instruction, 0)?,
            mint: account_at(instruction, 1)?,
            dest: account_at(instruction, 2)?,
            owner: account_at(instruction, 3)?,
            amount,
            decimals,
            signers: signers_from(instruction, 4)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::TransferChecked, &other)),
    }
}

pub fn decode_approve_checked(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<ApproveCheckedParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(4))? {
        TokenInstruction::ApproveChecked { amount, decimals } => Ok(ApproveCheckedParams {
            source: account_at(instruction, 0)?,
            mint: account_at(instruction, 1)?,
            delegate: account_at(instruction, 2)?,
            owner: account_at(instruction, 3)?,
            amount,
            decimals,
            signers: signers_from(instruction, 4)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::ApproveChecked, &other)),
    }
}

pub fn decode_mint_to_checked(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<MintToCheckedParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::MintToChecked { amount, decimals } => Ok(MintToCheckedParams {
            mint: account_at(instruction, 0)?,
            dest: account_at(instruction, 1)?,
            mint_authority: account_at(instruction, 2)?,
            amount,
            decimals,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::MintToChecked, &other)),
    }
}

pub fn decode_burn_checked(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<BurnCheckedParams, ProgramError> {
    match parse(registry, instruction, AccountCount::AtLeast(3))? {
        TokenInstruction::BurnChecked { amount, decimals } => Ok(BurnCheckedParams {
            account: account_at(instruction, 0)?,
            mint: account_at(instruction, 1)?,
            owner: account_at(instruction, 2)?,
            amount,
            decimals,
            signers: signers_from(instruction, 3)?,
        }),
        other => Err(type_mismatch(TokenInstructionType::BurnChecked, &other)),
    }
}
