//! Memo program client.
//!
//! The instruction data is the message itself, with no discriminant or length
//! prefix. The single account is the signer vouching for the memo.

use sol_core::{AccountMeta, Address, Instruction};

use crate::error::ProgramError;
use crate::registry::ProgramRegistry;
use crate::validate::{account_at, check_account_count, check_program_id, AccountCount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoParams {
    pub signer: Address,
    pub message: Vec<u8>,
}

/// Build a memo instruction. The message must be valid UTF-8.
pub fn memo_instruction(
    registry: &ProgramRegistry,
    params: &MemoParams,
) -> Result<Instruction, ProgramError> {
    if let Err(e) = std::str::from_utf8(&params.message) {
        tracing::warn!(signer = %params.signer, "memo rejected: not utf-8");
        return Err(ProgramError::Constraint(format!("memo is not valid UTF-8: {e}")));
    }

    let accounts = vec![AccountMeta::writable(params.signer, true)];
    tracing::debug!(signer = %params.signer, len = params.message.len(), "built memo");
    Ok(Instruction::new(registry.memo_program_id, accounts, params.message.clone()))
}

/// Recover the signer and message from a memo instruction.
pub fn decode_memo(
    registry: &ProgramRegistry,
    instruction: &Instruction,
) -> Result<MemoParams, ProgramError> {
    check_program_id(instruction, &registry.memo_program_id)?;
    check_account_count(instruction, AccountCount::Exactly(1))?;

    Ok(MemoParams {
        signer: account_at(instruction, 0)?,
        message: instruction.data().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_layout() {
        let registry = ProgramRegistry::devnet();
        let params = MemoParams {
            signer: Address::new([7; 32]),
            message: b"test".to_vec(),
        };
        let ix = memo_instruction(&registry, &params).unwrap();

        assert_eq!(ix.program_id(), &registry.memo_program_id);
        assert_eq!(ix.data(), b"test");
        assert_eq!(ix.accounts().len(), 1);
        assert!(ix.accounts()[0].is_signer);
        assert!(ix.accounts()[0].is_writable);
        assert_eq!(decode_memo(&registry, &ix).unwrap(), params);
    }

    #[test]
    fn empty_memo_is_allowed() {
        let registry = ProgramRegistry::devnet();
        let params = MemoParams {
            signer: Address::new([7; 32]),
            message: Vec::new(),
        };
        assert!(memo_instruction(&registry, &params).unwrap().data().is_empty());
    }

    #[test]
    fn non_utf8_rejected() {
        let params = MemoParams {
            signer: Address::new([7; 32]),
            message: vec![0xFF, 0xFE],
        };
        assert!(matches!(
            memo_instruction(&ProgramRegistry::devnet(), &params),
            Err(ProgramError::Constraint(_))
        ));
    }

    #[test]
    fn decode_rejects_extra_accounts() {
        let registry = ProgramRegistry::devnet();
        let ix = Instruction::new(
            registry.memo_program_id,
            vec![
                AccountMeta::writable(Address::new([1; 32]), true),
                AccountMeta::writable(Address::new([2; 32]), true),
            ],
            b"hi".to_vec(),
        );
        assert_eq!(
            decode_memo(&registry, &ix).unwrap_err(),
            ProgramError::AccountCount {
                expected: "1".into(),
                found: 2,
            }
        );
    }
}
