//! Guards for the decode path.
//!
//! A payload's byte offsets only mean something once the instruction is known
//! to target the right program, carry the right number of account references
//! and lead with the expected discriminant.

use std::fmt;

use sol_core::{Address, Instruction};

use crate::error::ProgramError;

/// How many account references an instruction must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCount {
    Exactly(usize),
    /// Used where trailing multisig signers follow the fixed accounts.
    AtLeast(usize),
}

impl fmt::Display for AccountCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountCount::Exactly(n) => write!(f, "{n}"),
            AccountCount::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Check the instruction targets `expected`.
pub fn check_program_id(instruction: &Instruction, expected: &Address) -> Result<(), ProgramError> {
    if instruction.program_id() != expected {
        return Err(ProgramError::ProgramIdMismatch {
            expected: *expected,
            found: *instruction.program_id(),
        });
    }
    Ok(())
}

/// Check the number of account references.
pub fn check_account_count(
    instruction: &Instruction,
    expected: AccountCount,
) -> Result<(), ProgramError> {
    let found = instruction.accounts().len();
    let ok = match expected {
        AccountCount::Exactly(n) => found == n,
        AccountCount::AtLeast(n) => found >= n,
    };

    if !ok {
        return Err(ProgramError::AccountCount {
            expected: expected.to_string(),
            found,
        });
    }
    Ok(())
}

/// Check a decoded discriminant against the one the caller expects.
pub fn check_instruction_type<T>(found: T, expected: T) -> Result<(), ProgramError>
where
    T: PartialEq + fmt::Display,
{
    if found != expected {
        return Err(ProgramError::InstructionTypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Address at `index`, failing with an account-count error when missing.
pub(crate) fn account_at(instruction: &Instruction, index: usize) -> Result<Address, ProgramError> {
    instruction
        .account_address(index)
        .ok_or_else(|| ProgramError::AccountCount {
            expected: AccountCount::AtLeast(index + 1).to_string(),
            found: instruction.accounts().len(),
        })
}

/// Check that the account at `index` is `expected`.
pub(crate) fn check_account(
    instruction: &Instruction,
    index: usize,
    expected: &Address,
) -> Result<(), ProgramError> {
    let found = account_at(instruction, index)?;
    if found != *expected {
        return Err(ProgramError::AccountMismatch {
            index,
            expected: *expected,
            found,
        });
    }
    Ok(())
}

/// Check that the account at `index` is flagged as a signer.
pub(crate) fn check_signer(instruction: &Instruction, index: usize) -> Result<(), ProgramError> {
    let address = account_at(instruction, index)?;
    if !instruction.accounts()[index].is_signer {
        return Err(ProgramError::MissingSigner { index, address });
    }
    Ok(())
}

/// Addresses from `start` to the end of the account list.
pub(crate) fn accounts_from(instruction: &Instruction, start: usize) -> Vec<Address> {
    instruction
        .accounts()
        .iter()
        .skip(start)
        .map(|meta| meta.address)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sol_core::AccountMeta;

    fn ix_with_accounts(n: usize) -> Instruction {
        let accounts = (0..n)
            .map(|i| AccountMeta::readonly(Address::new([i as u8; 32]), false))
            .collect();
        Instruction::new(Address::new([9; 32]), accounts, vec![0])
    }

    #[test]
    fn exact_count_passes_and_fails() {
        let ix = ix_with_accounts(2);
        assert!(check_account_count(&ix, AccountCount::Exactly(2)).is_ok());

        let err = check_account_count(&ix, AccountCount::Exactly(3)).unwrap_err();
        assert_eq!(
            err,
            ProgramError::AccountCount {
                expected: "3".into(),
                found: 2,
            }
        );
    }

    #[test]
    fn at_least_count() {
        let ix = ix_with_accounts(4);
        assert!(check_account_count(&ix, AccountCount::AtLeast(3)).is_ok());
        assert!(check_account_count(&ix, AccountCount::AtLeast(4)).is_ok());

        let err = check_account_count(&ix, AccountCount::AtLeast(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: expected at least 5 account references, found 4"
        );
    }

    #[test]
    fn program_id_mismatch() {
        let ix = ix_with_accounts(0);
        assert!(check_program_id(&ix, &Address::new([9; 32])).is_ok());
        assert!(matches!(
            check_program_id(&ix, &Address::default()),
            Err(ProgramError::ProgramIdMismatch { .. })
        ));
    }

    #[test]
    fn account_at_out_of_range() {
        let ix = ix_with_accounts(2);
        assert_eq!(account_at(&ix, 1).unwrap(), Address::new([1; 32]));
        assert_eq!(
            account_at(&ix, 2).unwrap_err(),
            ProgramError::AccountCount {
                expected: "at least 3".into(),
                found: 2,
            }
        );
    }

    #[test]
    fn account_identity_checked() {
        let ix = ix_with_accounts(3);
        assert!(check_account(&ix, 2, &Address::new([2; 32])).is_ok());
        assert_eq!(
            check_account(&ix, 2, &Address::default()).unwrap_err(),
            ProgramError::AccountMismatch {
                index: 2,
                expected: Address::default(),
                found: Address::new([2; 32]),
            }
        );
        assert!(matches!(
            check_account(&ix, 3, &Address::default()),
            Err(ProgramError::AccountCount { .. })
        ));
    }

    #[test]
    fn signer_flag_checked() {
        let ix = Instruction::new(
            Address::new([9; 32]),
            vec![
                AccountMeta::readonly(Address::new([1; 32]), true),
                AccountMeta::writable(Address::new([2; 32]), false),
            ],
            vec![0],
        );
        assert!(check_signer(&ix, 0).is_ok());
        assert_eq!(
            check_signer(&ix, 1).unwrap_err(),
            ProgramError::MissingSigner {
                index: 1,
                address: Address::new([2; 32]),
            }
        );
    }

    #[test]
    fn accounts_from_collects_tail() {
        let ix = ix_with_accounts(4);
        assert_eq!(
            accounts_from(&ix, 2),
            vec![Address::new([2; 32]), Address::new([3; 32])]
        );
        assert!(accounts_from(&ix, 4).is_empty());
    }

    #[test]
    fn instruction_type_mismatch_names_both() {
        let err = check_instruction_type(1u8, 0u8).unwrap_err();
        assert_eq!(
            err,
            ProgramError::InstructionTypeMismatch {
                expected: "0".into(),
                found: "1".into(),
            }
        );
    }
}
