#![no_std]

//! secp256k1 signer recovery.
//!
//! Recovers the identity behind a 65-byte `r || s || v` signature over a
//! 32-byte digest. Identities are the SHA-256 of the SEC1 uncompressed public
//! key, the same value a vault is configured with.
//!
//! Signatures that the host would refuse to recover are screened out first so
//! that they surface as a typed [`RecoveryError`] instead of a host trap.

use soroban_sdk::{contract, contracterror, contractimpl, log, Bytes, BytesN, Env};

/// secp256k1 group order `n`, big-endian.
const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// `n / 2`, the largest accepted `s`.
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecoveryError {
    InvalidRecoveryId = 1,
    InvalidScalar = 2,
    HighS = 3,
}

#[contract]
pub struct SignatureRecoveryContract;

#[contractimpl]
impl SignatureRecoveryContract {
    /// Recovers the signer identity for `signature` over `hash`.
    pub fn recover(
        env: Env,
        hash: BytesN<32>,
        signature: BytesN<65>,
    ) -> Result<BytesN<32>, RecoveryError> {
        let public_key = Self::recover_public_key(env.clone(), hash, signature)?;
        Ok(signer_identity(&env, &public_key))
    }

    /// Recovers the uncompressed public key for `signature` over `hash`.
    pub fn recover_public_key(
        env: Env,
        hash: BytesN<32>,
        signature: BytesN<65>,
    ) -> Result<BytesN<65>, RecoveryError> {
        let (compact, recovery_id) = split_signature(&signature.to_array()).map_err(|error| {
            log!(&env, "signature rejected before recovery", error as u32);
            error
        })?;
        let compact = BytesN::from_array(&env, &compact);

        Ok(env
            .crypto_hazmat()
            .secp256k1_recover(&hash, &compact, recovery_id))
    }

    /// Identity a vault stores for the given uncompressed public key.
    pub fn identity_of(env: Env, public_key: BytesN<65>) -> BytesN<32> {
        signer_identity(&env, &public_key)
    }
}

pub fn signer_identity(env: &Env, public_key: &BytesN<65>) -> BytesN<32> {
    let encoded: Bytes = public_key.clone().into();
    env.crypto().sha256(&encoded).to_bytes()
}

/// Splits `r || s || v` into the compact signature and a normalized
/// recovery id, rejecting anything outside the canonical range.
fn split_signature(raw: &[u8; 65]) -> Result<([u8; 64], u32), RecoveryError> {
    let recovery_id = match raw[64] {
        0 | 1 => raw[64] as u32,
        27 | 28 => (raw[64] - 27) as u32,
        _ => return Err(RecoveryError::InvalidRecoveryId),
    };

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&raw[..32]);
    s.copy_from_slice(&raw[32..64]);

    if !is_valid_scalar(&r) || !is_valid_scalar(&s) {
        return Err(RecoveryError::InvalidScalar);
    }
    if s > HALF_CURVE_ORDER {
        return Err(RecoveryError::HighS);
    }

    let mut compact = [0u8; 64];
    compact.copy_from_slice(&raw[..64]);
    Ok((compact, recovery_id))
}

// Big-endian byte arrays compare in numeric order.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    scalar.iter().any(|b| *b != 0) && *scalar < CURVE_ORDER
}

mod test;
