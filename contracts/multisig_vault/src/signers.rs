//! Signer set and threshold, written once by `initialize`.

use soroban_sdk::{BytesN, Env, Vec};

use crate::config;
use crate::errors::VaultError;
use crate::events::Initialized;
use crate::types::DataKey;

pub fn initialize(env: &Env, signers: &Vec<BytesN<32>>, threshold: u32) -> Result<(), VaultError> {
    if is_initialized(env) {
        return Err(VaultError::AlreadyInitialized);
    }

    if signers.is_empty() {
        return Err(VaultError::EmptySignerSet);
    }

    if threshold == 0 || threshold > signers.len() {
        return Err(VaultError::InvalidThreshold);
    }

    for i in 0..signers.len() {
        for j in (i + 1)..signers.len() {
            if signers.get_unchecked(i) == signers.get_unchecked(j) {
                return Err(VaultError::DuplicateSigner);
            }
        }
    }

    let storage = env.storage().instance();
    storage.set(&DataKey::Initialized, &true);
    storage.set(&DataKey::Signers, signers);
    storage.set(&DataKey::Threshold, &threshold);
    storage.set(&DataKey::TxnId, &0u64);

    for signer in signers.iter() {
        storage.set(&DataKey::Signer(signer), &true);
    }
    config::extend_instance(env);

    Initialized {
        signer_count: signers.len(),
        threshold,
    }
    .publish(env);

    Ok(())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn require_initialized(env: &Env) -> Result<(), VaultError> {
    if !is_initialized(env) {
        return Err(VaultError::NotInitialized);
    }
    Ok(())
}

pub fn is_signer(env: &Env, signer: &BytesN<32>) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Signer(signer.clone()))
}

/// Zero until initialized.
pub fn threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .unwrap_or(0)
}

pub fn signers(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .unwrap_or(Vec::new(env))
}
