//! Property tests: decode(build(params)) == params, derivation determinism,
//! the off-curve guarantee, and the account-count rules.

use proptest::prelude::*;
use sol_core::{find_program_address, Address};
use spl_programs::name_service::*;
use spl_programs::token::{self, TokenInstruction};
use spl_programs::*;

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 32]>().prop_map(Address::new)
}

/// Addresses that are never the default address.
fn arb_custom_address() -> impl Strategy<Value = Address> {
    arb_address().prop_filter("non-default", |a| !a.is_default())
}

fn arb_slot() -> impl Strategy<Value = AccountSlot> {
    prop_oneof![
        Just(AccountSlot::Default),
        arb_custom_address().prop_map(AccountSlot::Custom),
    ]
}

prop_compose! {
    fn arb_create_params()
        (
            funding in arb_custom_address(),
            hashed in any::<[u8; 32]>(),
            lamports in any::<u64>(),
            space in any::<u32>(),
            owner in proptest::option::of(arb_custom_address()),
            class in arb_slot(),
            parent in arb_slot(),
            parent_owner in arb_custom_address(),
        ) -> CreateNameParams
    {
        CreateNameParams {
            funding_account: funding,
            hashed_name: hashed.to_vec(),
            lamports,
            space,
            // Decoding yields `None` for an owner equal to the funder.
            owner_account: owner.filter(|o| *o != funding),
            class_account: class,
            parent_account: parent,
            parent_owner_account: match parent {
                AccountSlot::Custom(_) => Some(parent_owner),
                AccountSlot::Default => None,
            },
        }
    }
}

fn arb_token_instruction() -> impl Strategy<Value = TokenInstruction> {
    let authority = prop_oneof![
        Just(token::AuthorityType::MintTokens),
        Just(token::AuthorityType::FreezeAccount),
        Just(token::AuthorityType::AccountOwner),
        Just(token::AuthorityType::CloseAccount),
    ];
    prop_oneof![
        (any::<u8>(), arb_address(), proptest::option::of(arb_address())).prop_map(
            |(decimals, mint_authority, freeze_authority)| TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            },
        ),
        Just(TokenInstruction::InitializeAccount),
        any::<u8>().prop_map(|m| TokenInstruction::InitializeMultisig { m }),
        any::<u64>().prop_map(|amount| TokenInstruction::Transfer { amount }),
        any::<u64>().prop_map(|amount| TokenInstruction::Approve { amount }),
        Just(TokenInstruction::Revoke),
        (authority, proptest::option::of(arb_address())).prop_map(
            |(authority_type, new_authority)| TokenInstruction::SetAuthority {
                authority_type,
                new_authority,
            },
        ),
        any::<u64>().prop_map(|amount| TokenInstruction::MintTo { amount }),
        any::<u64>().prop_map(|amount| TokenInstruction::Burn { amount }),
        Just(TokenInstruction::CloseAccount),
        Just(TokenInstruction::FreezeAccount),
        Just(TokenInstruction::ThawAccount),
        (any::<u64>(), any::<u8>())
            .prop_map(|(amount, decimals)| TokenInstruction::TransferChecked { amount, decimals }),
        (any::<u64>(), any::<u8>())
            .prop_map(|(amount, decimals)| TokenInstruction::ApproveChecked { amount, decimals }),
        (any::<u64>(), any::<u8>())
            .prop_map(|(amount, decimals)| TokenInstruction::MintToChecked { amount, decimals }),
        (any::<u64>(), any::<u8>())
            .prop_map(|(amount, decimals)| TokenInstruction::BurnChecked { amount, decimals }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // ─── Round-trip ────────────────────────────────────────────────

    #[test]
    fn create_roundtrip(params in arb_create_params()) {
        let registry = ProgramRegistry::devnet();
        let ix = create_name(&registry, &params).unwrap();
        prop_assert_eq!(decode_create_name(&registry, &ix).unwrap(), params);
    }

    #[test]
    fn update_roundtrip(
        name_account in arb_address(),
        signer in arb_address(),
        offset in any::<u32>(),
        input_data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let registry = ProgramRegistry::devnet();
        let params = UpdateNameParams {
            name_account,
            offset,
            input_data,
            name_update_signer: signer,
        };
        let ix = update_name(&registry, &params).unwrap();
        prop_assert_eq!(ix.accounts().len(), 2);
        prop_assert_eq!(decode_update_name(&registry, &ix).unwrap(), params);
    }

    #[test]
    fn transfer_roundtrip(
        name_account in arb_address(),
        new_owner in arb_address(),
        owner in arb_address(),
        class in arb_slot(),
    ) {
        let registry = ProgramRegistry::devnet();
        let params = TransferNameParams {
            name_account,
            new_owner_account: new_owner,
            owner_account: owner,
            class_account: class,
        };
        let ix = transfer_name(&registry, &params).unwrap();
        let expected = if matches!(class, AccountSlot::Custom(_)) { 3 } else { 2 };
        prop_assert_eq!(ix.accounts().len(), expected);
        prop_assert_eq!(decode_transfer_name(&registry, &ix).unwrap(), params);
    }

    #[test]
    fn delete_roundtrip(
        name_account in arb_address(),
        owner in arb_address(),
        refund in proptest::option::of(arb_address()),
    ) {
        let registry = ProgramRegistry::devnet();
        let params = DeleteNameParams {
            name_account,
            owner_account: owner,
            refund_account: refund.filter(|r| *r != owner),
        };
        let ix = delete_name(&registry, &params).unwrap();
        prop_assert_eq!(ix.accounts().len(), 3);
        prop_assert_eq!(decode_delete_name(&registry, &ix).unwrap(), params);
    }

    #[test]
    fn memo_roundtrip(signer in arb_address(), message in ".{0,64}") {
        let registry = ProgramRegistry::devnet();
        let params = MemoParams {
            signer,
            message: message.into_bytes(),
        };
        let ix = memo_instruction(&registry, &params).unwrap();
        prop_assert_eq!(ix.data(), params.message.as_slice());
        prop_assert_eq!(decode_memo(&registry, &ix).unwrap(), params);
    }

    #[test]
    fn token_layout_roundtrip(ix in arb_token_instruction()) {
        prop_assert_eq!(TokenInstruction::unpack(&ix.pack()).unwrap(), ix);
    }

    #[test]
    fn token_transfer_roundtrip(
        source in arb_address(),
        dest in arb_address(),
        owner in arb_address(),
        amount in any::<u64>(),
        signers in proptest::collection::vec(arb_address(), 0..=token::MAX_SIGNERS),
    ) {
        let registry = ProgramRegistry::mainnet();
        let params = token::TransferParams {
            source,
            dest,
            owner,
            amount,
            signers,
        };
        let ix = token::transfer(&registry, &params).unwrap();
        prop_assert_eq!(ix.accounts().len(), 3 + params.signers.len());
        prop_assert_eq!(token::decode_transfer(&registry, &ix).unwrap(), params);
    }

    // ─── Account counts ────────────────────────────────────────────

    #[test]
    fn create_has_seven_accounts_iff_parent(params in arb_create_params()) {
        let ix = create_name(&ProgramRegistry::devnet(), &params).unwrap();
        let expected = match params.parent_account {
            AccountSlot::Custom(_) => 7,
            AccountSlot::Default => 6,
        };
        prop_assert_eq!(ix.accounts().len(), expected);
    }

    // ─── Address derivation ────────────────────────────────────────

    #[test]
    fn derivation_is_deterministic_and_off_curve(
        seeds in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..=32), 0..4),
        program_id in arb_address(),
    ) {
        let seed_refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();
        let first = find_program_address(&seed_refs, &program_id).unwrap();
        let second = find_program_address(&seed_refs, &program_id).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(!first.0.is_on_curve());
    }
}
