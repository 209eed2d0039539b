//! Guarded execution of approved proposals.
//!
//! Checks run in a fixed order: existence, replay, expiration, kind, token,
//! quorum. The transfer happens before `executed` is written; if the asset
//! contract fails, the whole invocation aborts and nothing is persisted.

use soroban_sdk::{log, token, Address, BytesN, Env, Vec};

use crate::config;
use crate::errors::VaultError;
use crate::events::ProposalExecuted;
use crate::hasher;
use crate::proposals;
use crate::quorum;
use crate::signers;
use crate::types::{Proposal, TxnKind};

pub fn execute_native_transfer(
    env: &Env,
    id: u64,
    signatures: &Vec<BytesN<65>>,
) -> Result<(), VaultError> {
    let (proposal, approvals) = authorize(env, id, signatures, TxnKind::NativeTransfer, None)?;
    settle(env, proposal, &config::native_asset(env), approvals);
    Ok(())
}

pub fn execute_token_transfer(
    env: &Env,
    id: u64,
    signatures: &Vec<BytesN<65>>,
    token: &Address,
) -> Result<(), VaultError> {
    let (proposal, approvals) =
        authorize(env, id, signatures, TxnKind::TokenTransfer, Some(token))?;
    settle(env, proposal, token, approvals);
    Ok(())
}

fn authorize(
    env: &Env,
    id: u64,
    signatures: &Vec<BytesN<65>>,
    kind: TxnKind,
    token: Option<&Address>,
) -> Result<(Proposal, u32), VaultError> {
    let proposal = proposals::load(env, id)?;

    if proposal.executed {
        return Err(VaultError::AlreadyExecuted);
    }

    if env.ledger().sequence() > proposal.expiration {
        return Err(VaultError::TransactionExpired);
    }

    if proposal.kind() != kind {
        return Err(VaultError::WrongTransactionKind);
    }

    if let Some(token) = token {
        if proposal.token().as_ref() != Some(token) {
            return Err(VaultError::TokenMismatch);
        }
    }

    let hash = hasher::digest(env, &proposal);
    let approvals = quorum::count_unique_valid_signatures(env, &hash, signatures);
    let threshold = signers::threshold(env);

    if approvals < threshold {
        log!(env, "quorum not met", id, approvals, threshold);
        return Err(VaultError::QuorumNotMet);
    }

    Ok((proposal, approvals))
}

fn settle(env: &Env, mut proposal: Proposal, asset: &Address, approvals: u32) {
    let token_client = token::Client::new(env, asset);
    token_client.transfer(
        &env.current_contract_address(),
        &proposal.recipient,
        &proposal.amount,
    );

    proposal.executed = true;
    proposals::save(env, &proposal);

    ProposalExecuted {
        id: proposal.id,
        kind: proposal.kind(),
        amount: proposal.amount,
        recipient: proposal.recipient,
        signatures: approvals,
    }
    .publish(env);
}

/// Custody held by the vault in `asset`.
pub fn balance(env: &Env, asset: &Address) -> i128 {
    token::Client::new(env, asset).balance(&env.current_contract_address())
}
