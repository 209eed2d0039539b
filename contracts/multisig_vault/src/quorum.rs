//! Signature recovery and quorum counting.
//!
//! Recovery is delegated to the configured recovery contract through a
//! fallible call, so a signature it cannot recover is reported as a
//! [`Rejection`] instead of aborting the invocation.

use soroban_sdk::{contractclient, log, symbol_short, BytesN, Env, Map, Symbol, Vec};

use crate::config;
use crate::errors::VaultError;
use crate::hasher;
use crate::proposals;
use crate::signers;

#[contractclient(name = "SignatureRecoveryClient")]
pub trait SignatureRecovery {
    fn recover(env: Env, hash: BytesN<32>, signature: BytesN<65>) -> BytesN<32>;
}

/// Why a signature did not yield a signer. Both surface as
/// [`VaultError::InvalidSignature`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Rejection {
    Unrecoverable,
    UnknownSigner,
}

impl Rejection {
    pub(crate) fn as_symbol(self) -> Symbol {
        match self {
            Rejection::Unrecoverable => symbol_short!("unrecover"),
            Rejection::UnknownSigner => symbol_short!("nonsigner"),
        }
    }
}

impl From<Rejection> for VaultError {
    fn from(_: Rejection) -> Self {
        VaultError::InvalidSignature
    }
}

pub(crate) fn recover_signer(
    env: &Env,
    hash: &BytesN<32>,
    signature: &BytesN<65>,
) -> Result<BytesN<32>, Rejection> {
    let client = SignatureRecoveryClient::new(env, &config::recovery(env));

    let signer = match client.try_recover(hash, signature) {
        Ok(Ok(signer)) => signer,
        _ => return Err(Rejection::Unrecoverable),
    };

    if !signers::is_signer(env, &signer) {
        return Err(Rejection::UnknownSigner);
    }
    Ok(signer)
}

pub fn extract_signer(
    env: &Env,
    hash: &BytesN<32>,
    signature: &BytesN<65>,
) -> Result<BytesN<32>, VaultError> {
    recover_signer(env, hash, signature).map_err(|rejection| {
        log!(env, "signature rejected", rejection.as_symbol());
        rejection.into()
    })
}

/// Distinct configured signers with a valid signature over `hash`.
/// Unusable signatures are skipped, repeats of a signer count once.
pub fn count_unique_valid_signatures(
    env: &Env,
    hash: &BytesN<32>,
    signatures: &Vec<BytesN<65>>,
) -> u32 {
    let mut accounted: Map<BytesN<32>, bool> = Map::new(env);

    for signature in signatures.iter() {
        match recover_signer(env, hash, &signature) {
            Ok(signer) => accounted.set(signer, true),
            Err(rejection) => {
                log!(env, "signature skipped", rejection.as_symbol());
            }
        }
    }

    accounted.len()
}

pub fn count_for_proposal(
    env: &Env,
    id: u64,
    signatures: &Vec<BytesN<65>>,
) -> Result<u32, VaultError> {
    let proposal = proposals::load(env, id)?;
    let hash = hasher::digest(env, &proposal);
    Ok(count_unique_valid_signatures(env, &hash, signatures))
}
