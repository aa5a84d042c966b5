//! Name service instruction builders and decoders.
//!
//! Account order is positional and must match what the on-chain program reads:
//!
//! ```text
//! Create:   system_program, funding (s,w), name_account (w), owner, class (s if custom),
//!           parent, [parent_owner (s) iff parent is custom]
//! Update:   name_account (w), update_signer (s)
//! Transfer: name_account (w), owner (s), [class (s) iff custom]
//! Delete:   name_account (w), owner (s), refund (w)
//! ```

use sol_core::{find_program_address, AccountMeta, Address, Instruction};

use crate::error::ProgramError;
use crate::name_service::layout::{NameInstruction, NameInstructionType};
use crate::registry::ProgramRegistry;
use crate::validate::{
    account_at, check_account, check_account_count, check_instruction_type, check_program_id,
    check_signer, AccountCount,
};

/// An optional account that falls back to the registry's default address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountSlot {
    #[default]
    Default,
    Custom(Address),
}

impl AccountSlot {
    /// Classify a concrete address, mapping the default address to `Default`.
    pub fn from_address(address: Address, default: &Address) -> Self {
        if address == *default {
            Self::Default
        } else {
            Self::Custom(address)
        }
    }

    /// Resolve to a concrete address. A `Custom` slot holding the default
    /// address is treated as `Default`.
    fn resolve(self, default: &Address) -> ResolvedSlot {
        match self {
            Self::Custom(address) if address != *default => ResolvedSlot {
                address,
                is_custom: true,
            },
            _ => ResolvedSlot {
                address: *default,
                is_custom: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ResolvedSlot {
    address: Address,
    is_custom: bool,
}

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

/// Parameters for creating and funding a new name account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNameParams {
    /// Pays for the new account. Signer.
    pub funding_account: Address,
    /// SHA-256 of the prefixed name; must be 32 bytes.
    pub hashed_name: Vec<u8>,
    pub lamports: u64,
    /// Data bytes to allocate, excluding the header buffer.
    pub space: u32,
    /// Defaults to `funding_account`.
    pub owner_account: Option<Address>,
    /// Signs when custom.
    pub class_account: AccountSlot,
    pub parent_account: AccountSlot,
    /// Required, and signs, when `parent_account` is custom.
    pub parent_owner_account: Option<Address>,
}

impl CreateNameParams {
    pub fn new(
        funding_account: Address,
        hashed_name: impl Into<Vec<u8>>,
        lamports: u64,
        space: u32,
    ) -> Self {
        Self {
            funding_account,
            hashed_name: hashed_name.into(),
            lamports,
            space,
            owner_account: None,
            class_account: AccountSlot::Default,
            parent_account: AccountSlot::Default,
            parent_owner_account: None,
        }
    }

    /// Fill every default and check the parent-owner constraint.
    fn resolve(&self, registry: &ProgramRegistry) -> Result<ResolvedCreate, ProgramError> {
        let default = registry.default_address();
        let class = self.class_account.resolve(&default);
        let parent = self.parent_account.resolve(&default);

        let parent_owner = match (parent.is_custom, self.parent_owner_account) {
            (true, Some(owner)) if owner != default => Some(owner),
            (true, _) => {
                tracing::warn!(parent = %parent.address, "create rejected: parent owner missing");
                return Err(ProgramError::Constraint(format!(
                    "parent account {} requires its owner account as a signer",
                    parent.address
                )));
            }
            (false, Some(owner)) => {
                tracing::warn!(%owner, "ignoring parent owner: no parent account supplied");
                None
            }
            (false, None) => None,
        };

        Ok(ResolvedCreate {
            owner: self.owner_account.unwrap_or(self.funding_account),
            class,
            parent,
            parent_owner,
        })
    }
}

struct ResolvedCreate {
    owner: Address,
    class: ResolvedSlot,
    parent: ResolvedSlot,
    parent_owner: Option<Address>,
}

/// Parameters for writing into a name account's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNameParams {
    pub name_account: Address,
    pub offset: u32,
    pub input_data: Vec<u8>,
    /// The owner, or the class account when one is set.
    pub name_update_signer: Address,
}

/// Parameters for handing a name account to a new owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferNameParams {
    pub name_account: Address,
    pub new_owner_account: Address,
    pub owner_account: Address,
    /// Signs when custom.
    pub class_account: AccountSlot,
}

/// Parameters for closing a name account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteNameParams {
    pub name_account: Address,
    pub owner_account: Address,
    /// Receives the lamports. Defaults to `owner_account`.
    pub refund_account: Option<Address>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Derive the name account address for a hashed name, class and parent.
pub fn name_account_address(
    registry: &ProgramRegistry,
    hashed_name: &[u8],
    class_account: &Address,
    parent_account: &Address,
) -> Result<Address, ProgramError> {
    let (address, _bump) = find_program_address(
        &[hashed_name, class_account.as_ref(), parent_account.as_ref()],
        &registry.name_program_id,
    )?;
    Ok(address)
}

/// Build an instruction that creates and funds a new name account.
pub fn create_name(
    registry: &ProgramRegistry,
    params: &CreateNameParams,
) -> Result<Instruction, ProgramError> {
    let resolved = params.resolve(registry)?;

    let data = NameInstruction::create(&params.hashed_name, params.lamports, params.space)?.pack()?;

    let name_account = name_account_address(
        registry,
        &params.hashed_name,
        &resolved.class.address,
        &resolved.parent.address,
    )?;

    let mut accounts = vec![
        AccountMeta::readonly(registry.system_program_id, false),
        AccountMeta::writable(params.funding_account, true),
        AccountMeta::writable(name_account, false),
        AccountMeta::readonly(resolved.owner, false),
        AccountMeta::readonly(resolved.class.address, resolved.class.is_custom),
        AccountMeta::readonly(resolved.parent.address, false),
    ];
    if let Some(parent_owner) = resolved.parent_owner {
        accounts.push(AccountMeta::readonly(parent_owner, true));
    }

    tracing::debug!(
        hashed_name = %hex::encode(&params.hashed_name),
        %name_account,
        accounts = accounts.len(),
        "built name service create"
    );

    Ok(Instruction::new(registry.name_program_id, accounts, data))
}

/// Build an instruction that overwrites part of a name account's data.
pub fn update_name(
    registry: &ProgramRegistry,
    params: &UpdateNameParams,
) -> Result<Instruction, ProgramError> {
    let data = NameInstruction::update(params.offset, &params.input_data)?.pack()?;

    let accounts = vec![
        AccountMeta::writable(params.name_account, false),
        AccountMeta::readonly(params.name_update_signer, true),
    ];

    tracing::debug!(
        name_account = %params.name_account,
        bytes = params.input_data.len(),
        "built name service update"
    );
    Ok(Instruction::new(registry.name_program_id, accounts, data))
}

/// Build an instruction that transfers a name account to a new owner.
pub fn transfer_name(
    registry: &ProgramRegistry,
    params: &TransferNameParams,
) -> Result<Instruction, ProgramError> {
    let data = NameInstruction::Transfer {
        new_owner: params.new_owner_account,
    }
    .pack()?;

    let mut accounts = vec![
        AccountMeta::writable(params.name_account, false),
        AccountMeta::readonly(params.owner_account, true),
    ];
    let class = params.class_account.resolve(&registry.default_address());
    if class.is_custom {
        accounts.push(AccountMeta::readonly(class.address, true));
    }

    tracing::debug!(
        name_account = %params.name_account,
        accounts = accounts.len(),
        "built name service transfer"
    );
    Ok(Instruction::new(registry.name_program_id, accounts, data))
}

/// Build an instruction that deletes a name account and refunds its lamports.
pub fn delete_name(
    registry: &ProgramRegistry,
    params: &DeleteNameParams,
) -> Result<Instruction, ProgramError> {
    let data = NameInstruction::Delete.pack()?;
    let refund = params.refund_account.unwrap_or(params.owner_account);

    let accounts = vec![
        AccountMeta::writable(params.name_account, false),
        AccountMeta::readonly(params.owner_account, true),
        AccountMeta::writable(refund, false),
    ];

    tracing::debug!(name_account = %params.name_account, %refund, "built name service delete");
    Ok(Instruction::new(registry.name_program_id, accounts, data))
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

fn parse_and_validate(
    registry: &ProgramRegistry,
    instruction: &Instruction,
    expected_accounts: AccountCount,
) -> Result<NameInstruction, ProgramError> {
    check_program_id(instruction, &registry.name_program_id)?;
    check_account_count(instruction, expected_accounts)?;
    NameInstruction::unpack(instruction.data())
}

fn type_mismatch(expected: NameInstructionType, found: &NameInstruction) -> ProgramError {
    ProgramError::InstructionTypeMismatch {
        expected: expected.to_string(),
        found: found.instruction_type().to_string(),
    }
}

/// Recover the create params from an instruction.
///
/// Defaults come back in canonical form: an owner equal to the funding
/// account is `None`, and class or parent equal to the default address is
/// [`AccountSlot::Default`].
///
/// The name account must be the one derived from the hashed name, class and
/// parent, and every account the program expects to sign must be flagged.
pub fn decode_create_name(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<CreateNameParams, ProgramError> {
    let default = registry.default_address();

    // The parent account decides whether a seventh account is expected.
    check_program_id(instruction, &registry.name_program_id)?;
    check_account_count(instruction, AccountCount::AtLeast(6))?;
    let parent = AccountSlot::from_address(account_at(instruction, 5)?, &default);
    let expected = match parent {
        AccountSlot::Default => 6,
        AccountSlot::Custom(_) => 7,
    };

    let decoded = parse_and_validate(registry, instruction, AccountCount::Exactly(expected))?;
    let (hashed_name, lamports, space) = match decoded {
        NameInstruction::Create {
            hashed_name,
            lamports,
            space,
            ..
        } => (hashed_name, lamports, space),
        other => return Err(type_mismatch(NameInstructionType::Create, &other)),
    };

    check_account(instruction, 0, &registry.system_program_id)?;
    check_signer(instruction, 1)?;

    let class_address = account_at(instruction, 4)?;
    let class = AccountSlot::from_address(class_address, &default);
    if let AccountSlot::Custom(_) = class {
        check_signer(instruction, 4)?;
    }

    let parent_address = account_at(instruction, 5)?;
    let name_account =
        name_account_address(registry, &hashed_name, &class_address, &parent_address)?;
    check_account(instruction, 2, &name_account)?;

    let parent_owner_account = match parent {
        AccountSlot::Custom(_) => {
            check_signer(instruction, 6)?;
            Some(account_at(instruction, 6)?)
        }
        AccountSlot::Default => None,
    };

    let funding_account = account_at(instruction, 1)?;
    let owner = account_at(instruction, 3)?;

    Ok(CreateNameParams {
        funding_account,
        hashed_name,
        lamports,
        space,
        owner_account: (owner != funding_account).then_some(owner),
        class_account: class,
        parent_account: parent,
        parent_owner_account,
    })
}

/// Recover the update params from an instruction.
pub fn decode_update_name(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<UpdateNameParams, ProgramError> {
    let decoded = parse_and_validate(registry, instruction, AccountCount::Exactly(2))?;
    let (offset, input_data) = match decoded {
        NameInstruction::Update { offset, input_data, .. } => (offset, input_data),
        other => return Err(type_mismatch(NameInstructionType::Update, &other)),
    };
    check_signer(instruction, 1)?;

    Ok(UpdateNameParams {
        name_account: account_at(instruction, 0)?,
        offset,
        input_data,
        name_update_signer: account_at(instruction, 1)?,
    })
}

/// Recover the transfer params from an instruction.
///
/// A third account must be a custom class; the default class is never listed.
pub fn decode_transfer_name(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<TransferNameParams, ProgramError> {
    // A third account is the class signer.
    let expected = if instruction.accounts().len() == 3 { 3 } else { 2 };
    let decoded = parse_and_validate(registry, instruction, AccountCount::Exactly(expected))?;
    let new_owner = match decoded {
        NameInstruction::Transfer { new_owner } => new_owner,
        other => return Err(type_mismatch(NameInstructionType::Transfer, &other)),
    };

    check_signer(instruction, 1)?;

    let class_account = match instruction.account_address(2) {
        Some(class) if class == registry.default_address() => {
            return Err(ProgramError::AccountCount {
                expected: "2".into(),
                found: 3,
            });
        }
        Some(class) => {
            check_signer(instruction, 2)?;
            AccountSlot::Custom(class)
        }
        None => AccountSlot::Default,
    };

    Ok(TransferNameParams {
        name_account: account_at(instruction, 0)?,
        new_owner_account: new_owner,
        owner_account: account_at(instruction, 1)?,
        class_account,
    })
}

/// Recover the delete params from an instruction.
///
/// A refund account equal to the owner decodes as `None`.
pub fn decode_delete_name(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<DeleteNameParams, ProgramError> {
    let decoded = parse_and_validate(registry, instruction, AccountCount::Exactly(3))?;
    check_instruction_type(decoded.instruction_type(), NameInstructionType::Delete)?;
    check_signer(instruction, 1)?;

    let owner_account = account_at(instruction, 1)?;
    let refund = account_at(instruction, 2)?;

    Ok(DeleteNameParams {
        name_account: account_at(instruction, 0)?,
        owner_account,
        refund_account: (refund != owner_account).then_some(refund),
    })
}
