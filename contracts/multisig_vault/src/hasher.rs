//! Canonical digests signed off-chain: one per stored proposal, and one per
//! submission that a proposer signs to author it.

use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::errors::VaultError;
use crate::proposals;
use crate::types::{Proposal, TxnKind};

const DIGEST_DOMAIN: &[u8] = b"multisig-vault/txn/v1";
const SUBMISSION_DOMAIN: &[u8] = b"multisig-vault/submit/v1";

/// Fields covered by the digest. `vault` pins the digest to one deployment.
#[contracttype(export = false)]
#[derive(Clone, Debug, Eq, PartialEq)]
struct DigestFields {
    vault: Address,
    id: u64,
    kind: TxnKind,
    amount: i128,
    recipient: Address,
    token: Option<Address>,
    expiration: u32,
}

/// Fields a proposer signs to submit. `id` is the id the submission will be
/// stored under, so a signature admits exactly one proposal.
#[contracttype(export = false)]
#[derive(Clone, Debug, Eq, PartialEq)]
struct SubmissionFields {
    vault: Address,
    id: u64,
    proposer: BytesN<32>,
    kind: TxnKind,
    amount: i128,
    recipient: Address,
    token: Option<Address>,
    expiration: Option<u32>,
}

/// sha256(domain || xdr(fields)). `executed`, `proposer` and
/// `submitted_at` are not covered.
pub fn digest(env: &Env, proposal: &Proposal) -> BytesN<32> {
    let fields = DigestFields {
        vault: env.current_contract_address(),
        id: proposal.id,
        kind: proposal.kind(),
        amount: proposal.amount,
        recipient: proposal.recipient.clone(),
        token: proposal.token(),
        expiration: proposal.expiration,
    };

    tagged_hash(env, DIGEST_DOMAIN, &fields.to_xdr(env))
}

pub fn hash_proposal(env: &Env, id: u64) -> Result<BytesN<32>, VaultError> {
    let proposal = proposals::load(env, id)?;
    Ok(digest(env, &proposal))
}

/// Digest the proposer signs for the next submission, over the arguments
/// exactly as they will be passed to `submit`.
pub fn hash_submission(
    env: &Env,
    proposer: &BytesN<32>,
    kind: TxnKind,
    amount: i128,
    recipient: &Address,
    token: &Option<Address>,
    expiration: Option<u32>,
) -> BytesN<32> {
    let fields = SubmissionFields {
        vault: env.current_contract_address(),
        id: proposals::count(env),
        proposer: proposer.clone(),
        kind,
        amount,
        recipient: recipient.clone(),
        token: token.clone(),
        expiration,
    };

    tagged_hash(env, SUBMISSION_DOMAIN, &fields.to_xdr(env))
}

fn tagged_hash(env: &Env, domain: &[u8], body: &Bytes) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, domain);
    preimage.append(body);
    env.crypto().sha256(&preimage).to_bytes()
}
