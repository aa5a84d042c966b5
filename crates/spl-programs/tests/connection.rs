//! A mock `Connection` exercising fetch-and-decode and submission.

use std::cell::RefCell;
use std::collections::HashMap;

use sol_core::{AccountEncoding, Address, Connection, Instruction};
use spl_programs::name_service::*;
use spl_programs::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum MockError {
    #[error("account {0} not found")]
    NotFound(Address),
}

#[derive(Default)]
struct MockConnection {
    accounts: HashMap<Address, Vec<u8>>,
    submitted: RefCell<Vec<(Instruction, Vec<Address>)>>,
    encodings: RefCell<Vec<AccountEncoding>>,
}

impl Connection for MockConnection {
    type Error = MockError;

    fn submit(
        &self,
        instruction: &Instruction,
        signers: &[Address],
    ) -> Result<String, Self::Error> {
        let mut submitted = self.submitted.borrow_mut();
        submitted.push((instruction.clone(), signers.to_vec()));
        Ok(format!("sig-{}", submitted.len()))
    }

    fn fetch_account_bytes(
        &self,
        address: &Address,
        encoding: AccountEncoding,
    ) -> Result<Vec<u8>, Self::Error> {
        self.encodings.borrow_mut().push(encoding);
        self.accounts.get(address).cloned().ok_or(MockError::NotFound(*address))
    }
}

fn addr(b: u8) -> Address {
    Address::new([b; 32])
}

#[test]
fn fetch_name_record_decodes_header() {
    let registry = ProgramRegistry::devnet();
    let name_account = name_account_address(
        &registry,
        &registry.hash_name("solana"),
        &registry.default_address(),
        &registry.default_address(),
    )
    .unwrap();

    let mut data = Vec::new();
    data.extend_from_slice(addr(0).as_bytes());
    data.extend_from_slice(addr(7).as_bytes());
    data.extend_from_slice(addr(0).as_bytes());
    data.extend_from_slice(b"https://example.org");

    let mut connection = MockConnection::default();
    connection.accounts.insert(name_account, data);

    let record = fetch_name_record(&connection, &name_account).unwrap();
    assert_eq!(record.header.owner, addr(7));
    assert!(record.header.parent_name.is_default());
    assert_eq!(record.data, b"https://example.org");
    assert_eq!(*connection.encodings.borrow(), vec![AccountEncoding::Base64]);
}

#[test]
fn fetch_missing_account_maps_error() {
    let connection = MockConnection::default();
    let err = fetch_name_record(&connection, &addr(1)).unwrap_err();
    assert!(matches!(err, ProgramError::Connection(ref msg) if msg.contains("not found")));
}

#[test]
fn submit_built_instruction() {
    let registry = ProgramRegistry::devnet();
    let hashed = registry.hash_name("solana");
    let params = CreateNameParams::new(addr(1), hashed.to_vec(), 1_000_000, 32);
    let ix = create_name(&registry, &params).unwrap();
    let signers: Vec<Address> = ix.signers().copied().collect();

    let connection = MockConnection::default();
    let signature = connection.submit(&ix, &signers).unwrap();

    assert_eq!(signature, "sig-1");
    let submitted = connection.submitted.borrow();
    assert_eq!(submitted[0].1, vec![addr(1)]);
    assert_eq!(decode_create_name(&registry, &submitted[0].0).unwrap(), params);
}
