//! Instructions as submitted to the ledger.
//!
//! An instruction names the program to invoke, an ordered list of account
//! references and an opaque payload. The receiving program reads accounts by
//! position, so the order of `accounts` is part of the wire contract.

use crate::address::Address;

/// A single account reference in an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountMeta {
    pub address: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account reference.
    pub fn writable(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account reference.
    pub fn readonly(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: false,
        }
    }
}

/// An instruction addressed to one program. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    program_id: Address,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
}

impl Instruction {
    pub fn new(program_id: Address, accounts: Vec<AccountMeta>, data: Vec<u8>) -> Self {
        Self {
            program_id,
            accounts,
            data,
        }
    }

    pub fn program_id(&self) -> &Address {
        &self.program_id
    }

    pub fn accounts(&self) -> &[AccountMeta] {
        &self.accounts
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Address of the account reference at `index`, if present.
    pub fn account_address(&self, index: usize) -> Option<Address> {
        self.accounts.get(index).map(|meta| meta.address)
    }

    /// Addresses whose signature the instruction requires, in order.
    pub fn signers(&self) -> impl Iterator<Item = &Address> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.address)
    }

    /// Split into `(program_id, accounts, data)`.
    pub fn into_parts(self) -> (Address, Vec<AccountMeta>, Vec<u8>) {
        (self.program_id, self.accounts, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::new([b; 32])
    }

    #[test]
    fn meta_constructors_set_flags() {
        let w = AccountMeta::writable(addr(1), true);
        assert!(w.is_signer && w.is_writable);

        let r = AccountMeta::readonly(addr(2), false);
        assert!(!r.is_signer && !r.is_writable);
    }

    #[test]
    fn accessors_preserve_order() {
        let ix = Instruction::new(
            addr(9),
            vec![
                AccountMeta::writable(addr(1), false),
                AccountMeta::readonly(addr(2), true),
                AccountMeta::writable(addr(3), true),
            ],
            vec![1, 2, 3],
        );

        assert_eq!(ix.program_id(), &addr(9));
        assert_eq!(ix.data(), &[1, 2, 3]);
        assert_eq!(ix.account_address(1), Some(addr(2)));
        assert_eq!(ix.account_address(3), None);

        let signers: Vec<_> = ix.signers().copied().collect();
        assert_eq!(signers, vec![addr(2), addr(3)]);
    }

    #[test]
    fn into_parts_roundtrip() {
        let accounts = vec![AccountMeta::writable(addr(1), true)];
        let ix = Instruction::new(addr(7), accounts.clone(), b"memo".to_vec());
        let (program_id, metas, data) = ix.into_parts();
        assert_eq!(program_id, addr(7));
        assert_eq!(metas, accounts);
        assert_eq!(data, b"memo");
    }
}
