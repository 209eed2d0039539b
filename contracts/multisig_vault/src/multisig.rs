use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

use crate::config;
use crate::errors::VaultError;
use crate::execution;
use crate::hasher;
use crate::proposals;
use crate::quorum;
use crate::signers;
use crate::types::{Proposal, TxnKind};

#[contract]
pub struct MultisigVault;

#[contractimpl]
impl MultisigVault {
    /// `native_asset` is the native asset contract the vault pays out of,
    /// `recovery` the contract that turns signatures into signer identities.
    pub fn __constructor(env: Env, admin: Address, native_asset: Address, recovery: Address) {
        config::store(&env, &admin, &native_asset, &recovery);
    }

    /// One-time setup of the signer set and threshold. Admin only.
    pub fn initialize(env: Env, signers: Vec<BytesN<32>>, threshold: u32) -> Result<(), VaultError> {
        config::admin(&env).require_auth();
        signers::initialize(&env, &signers, threshold)
    }

    /// Stores a transfer proposal authored by `proposer`, who signs
    /// [`hash_submission`](Self::hash_submission) over the same arguments.
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        env: Env,
        proposer: BytesN<32>,
        proposer_signature: BytesN<65>,
        kind: TxnKind,
        amount: i128,
        recipient: Address,
        token: Option<Address>,
        expiration: Option<u32>,
    ) -> Result<u64, VaultError> {
        proposals::submit(
            &env,
            proposer,
            proposer_signature,
            kind,
            amount,
            recipient,
            token,
            expiration,
        )
    }

    pub fn hash_submission(
        env: Env,
        proposer: BytesN<32>,
        kind: TxnKind,
        amount: i128,
        recipient: Address,
        token: Option<Address>,
        expiration: Option<u32>,
    ) -> BytesN<32> {
        hasher::hash_submission(&env, &proposer, kind, amount, &recipient, &token, expiration)
    }

    pub fn hash_proposal(env: Env, id: u64) -> Result<BytesN<32>, VaultError> {
        hasher::hash_proposal(&env, id)
    }

    pub fn extract_signer(
        env: Env,
        hash: BytesN<32>,
        signature: BytesN<65>,
    ) -> Result<BytesN<32>, VaultError> {
        quorum::extract_signer(&env, &hash, &signature)
    }

    pub fn count_unique_valid_signatures(
        env: Env,
        id: u64,
        signatures: Vec<BytesN<65>>,
    ) -> Result<u32, VaultError> {
        quorum::count_for_proposal(&env, id, &signatures)
    }

    pub fn execute_native_transfer(
        env: Env,
        id: u64,
        signatures: Vec<BytesN<65>>,
    ) -> Result<(), VaultError> {
        execution::execute_native_transfer(&env, id, &signatures)
    }

    pub fn execute_token_transfer(
        env: Env,
        id: u64,
        signatures: Vec<BytesN<65>>,
        token: Address,
    ) -> Result<(), VaultError> {
        execution::execute_token_transfer(&env, id, &signatures, &token)
    }

    pub fn get_proposal(env: Env, id: u64) -> Option<Proposal> {
        proposals::get(&env, id)
    }

    pub fn proposal_count(env: Env) -> u64 {
        proposals::count(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        signers::is_initialized(&env)
    }

    pub fn is_signer(env: Env, signer: BytesN<32>) -> bool {
        signers::is_signer(&env, &signer)
    }

    pub fn signers(env: Env) -> Vec<BytesN<32>> {
        signers::signers(&env)
    }

    pub fn threshold(env: Env) -> u32 {
        signers::threshold(&env)
    }

    pub fn admin(env: Env) -> Address {
        config::admin(&env)
    }

    pub fn native_balance(env: Env) -> i128 {
        execution::balance(&env, &config::native_asset(&env))
    }

    pub fn token_balance(env: Env, token: Address) -> i128 {
        execution::balance(&env, &token)
    }
}
