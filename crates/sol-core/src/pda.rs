//! Program Derived Address (PDA) derivation.
//!
//! A PDA is `SHA-256(seed_0 || ... || seed_n || bump || program_id || "ProgramDerivedAddress")`
//! for the first bump whose digest is NOT a valid Ed25519 point. Being off the
//! curve means no private key can exist for the address, so only the owning
//! program can sign for it.
//!
//! The concatenation order is part of the address: changing it yields a
//! different, non-interoperable address without any local error.

use sha2::{Digest, Sha256};

use crate::address::{bytes_are_curve_point, Address, ADDRESS_LEN};
use crate::error::CoreError;

/// Domain separator appended after the program id.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Maximum number of seeds hashed into one address, bump included.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of any single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Order in which the bump search visits candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpSearch {
    /// 255 down to 0. The canonical bump used for every account address.
    #[default]
    Descending,
    /// 0 up to 255, first accepted candidate wins.
    Ascending,
}

/// Find the canonical program address for `seeds` under `program_id`.
///
/// Iterates bump seeds from 255 down to 0 and returns the first digest that
/// is off the curve together with its bump.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), CoreError> {
    find_program_address_with(seeds, program_id, BumpSearch::Descending)
}

/// Find a program address, visiting bumps in the given order.
pub fn find_program_address_with(
    seeds: &[&[u8]],
    program_id: &Address,
    search: BumpSearch,
) -> Result<(Address, u8), CoreError> {
    // One slot is reserved for the bump.
    if seeds.len() >= MAX_SEEDS {
        return Err(CoreError::InvalidSeeds(format!(
            "at most {} seeds may precede the bump, got {}",
            MAX_SEEDS - 1,
            seeds.len()
        )));
    }
    check_seed_lengths(seeds)?;

    let try_bump = |bump: u8| -> Option<(Address, u8)> {
        match hash_candidate(seeds, &[bump], program_id) {
            Some(address) => {
                tracing::debug!(%program_id, bump, %address, "derived program address");
                Some((address, bump))
            }
            None => {
                tracing::trace!(%program_id, bump, "bump candidate lies on curve");
                None
            }
        }
    };

    let found = match search {
        BumpSearch::Descending => (0u8..=255).rev().find_map(&try_bump),
        BumpSearch::Ascending => (0u8..=255).find_map(&try_bump),
    };

    found.ok_or(CoreError::DerivationExhausted)
}

/// Derive a program address from seeds that already include any bump.
///
/// This is the strict, single-candidate form: it fails with
/// [`CoreError::OnCurve`] instead of searching.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<Address, CoreError> {
    if seeds.len() > MAX_SEEDS {
        return Err(CoreError::InvalidSeeds(format!(
            "at most {MAX_SEEDS} seeds are allowed, got {}",
            seeds.len()
        )));
    }
    check_seed_lengths(seeds)?;

    hash_candidate(seeds, &[], program_id).ok_or(CoreError::OnCurve)
}

/// Check that `seeds` plus `bump` derive exactly `expected`.
pub fn verify_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Address,
    expected: &Address,
) -> bool {
    let bump_seed = [bump];
    let mut with_bump: Vec<&[u8]> = seeds.to_vec();
    with_bump.push(&bump_seed);

    matches!(create_program_address(&with_bump, program_id), Ok(address) if address == *expected)
}

/// Derive an address from a base address, a string seed and an owning program.
///
/// The digest is `SHA-256(base || seed || program_id)`. No curve check is
/// made: the base key signs for the derived account.
pub fn create_with_seed(
    base: &Address,
    seed: &str,
    program_id: &Address,
) -> Result<Address, CoreError> {
    if seed.len() > MAX_SEED_LEN {
        return Err(CoreError::InvalidSeeds(format!(
            "seed is {} bytes, maximum is {MAX_SEED_LEN}",
            seed.len()
        )));
    }

    let mut hasher = Sha256::new();
    hasher.update(base.as_bytes());
    hasher.update(seed.as_bytes());
    hasher.update(program_id.as_bytes());
    let hash: [u8; ADDRESS_LEN] = hasher.finalize().into();

    Ok(Address::new(hash))
}

fn check_seed_lengths(seeds: &[&[u8]]) -> Result<(), CoreError> {
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(CoreError::InvalidSeeds(format!(
            "seed {index} is {} bytes, maximum is {MAX_SEED_LEN}",
            seed.len()
        )));
    }
    Ok(())
}

/// Hash one candidate. Returns `None` when the digest falls on the curve.
fn hash_candidate(seeds: &[&[u8]], bump_seed: &[u8], program_id: &Address) -> Option<Address> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(bump_seed);
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);

    let hash: [u8; ADDRESS_LEN] = hasher.finalize().into();

    if bytes_are_curve_point(&hash) {
        return None;
    }

    Some(Address::new(hash))
}
