//! Proposal table and id allocation.
//!
//! Ids start at 0 and advance only when a submission is stored. Proposals
//! live in persistent storage keyed by id; everything except `executed` is
//! fixed at submission.
//!
//! A submission is authored by the signer whose key signed
//! [`hash_submission`](crate::hasher::hash_submission) for it.

use soroban_sdk::{log, Address, BytesN, Env};

use crate::config::{self, BUMP_AMOUNT, DEFAULT_EXPIRATION_WINDOW, LIFETIME_THRESHOLD};
use crate::errors::VaultError;
use crate::events::ProposalSubmitted;
use crate::hasher;
use crate::quorum;
use crate::signers;
use crate::types::{DataKey, Proposal, TransferAsset, TxnKind};

#[allow(clippy::too_many_arguments)]
pub fn submit(
    env: &Env,
    proposer: BytesN<32>,
    proposer_signature: BytesN<65>,
    kind: TxnKind,
    amount: i128,
    recipient: Address,
    token: Option<Address>,
    expiration: Option<u32>,
) -> Result<u64, VaultError> {
    signers::require_initialized(env)?;

    let hash =
        hasher::hash_submission(env, &proposer, kind, amount, &recipient, &token, expiration);
    authenticate(env, &hash, &proposer, &proposer_signature)?;

    if amount <= 0 {
        return Err(VaultError::ZeroAmount);
    }

    let asset = match (kind, token) {
        (TxnKind::NativeTransfer, None) => TransferAsset::Native,
        (TxnKind::NativeTransfer, Some(_)) => return Err(VaultError::TokenNotAllowed),
        (TxnKind::TokenTransfer, Some(token)) => TransferAsset::Token(token),
        (TxnKind::TokenTransfer, None) => return Err(VaultError::TokenRequired),
    };

    let current = env.ledger().sequence();
    let expiration = match expiration {
        Some(height) if height < current => return Err(VaultError::ExpirationInPast),
        Some(height) => height,
        None => current.saturating_add(DEFAULT_EXPIRATION_WINDOW),
    };

    let id = count(env);
    env.storage().instance().set(&DataKey::TxnId, &(id + 1));
    config::extend_instance(env);

    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        asset,
        amount,
        recipient: recipient.clone(),
        submitted_at: current,
        expiration,
        executed: false,
    };
    save(env, &proposal);

    ProposalSubmitted {
        id,
        proposer,
        kind,
        amount,
        recipient,
        expiration,
    }
    .publish(env);

    Ok(id)
}

/// The signature must recover to `proposer`, and `proposer` must be in the
/// signer set.
fn authenticate(
    env: &Env,
    hash: &BytesN<32>,
    proposer: &BytesN<32>,
    signature: &BytesN<65>,
) -> Result<(), VaultError> {
    match quorum::recover_signer(env, hash, signature) {
        Ok(signer) if signer == *proposer => Ok(()),
        Ok(_) => {
            log!(env, "submission signed by another signer");
            Err(VaultError::NotASigner)
        }
        Err(rejection) => {
            log!(env, "submission rejected", rejection.as_symbol());
            Err(VaultError::NotASigner)
        }
    }
}

pub fn get(env: &Env, id: u64) -> Option<Proposal> {
    env.storage().persistent().get(&DataKey::Txn(id))
}

pub fn load(env: &Env, id: u64) -> Result<Proposal, VaultError> {
    get(env, id).ok_or(VaultError::ProposalNotFound)
}

pub fn save(env: &Env, proposal: &Proposal) {
    let key = DataKey::Txn(proposal.id);
    let storage = env.storage().persistent();
    storage.set(&key, proposal);
    storage.extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

/// Number of proposals ever submitted, which is also the next id.
pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TxnId).unwrap_or(0)
}
