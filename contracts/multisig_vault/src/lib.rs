#![no_std]

//! Threshold multisignature vault.
//!
//! A fixed set of secp256k1 signers controls the native balance and any token
//! balances held by the contract. A signer proposes a transfer by signing
//! [`hash_submission`](MultisigVault::hash_submission). Signers then sign
//! [`hash_proposal`](MultisigVault::hash_proposal) off-chain, and the transfer
//! executes once a single batch carries signatures from at least `threshold`
//! distinct signers.

mod config;
mod errors;
mod events;
mod execution;
mod hasher;
mod multisig;
mod proposals;
mod quorum;
mod signers;
mod types;

pub use config::DEFAULT_EXPIRATION_WINDOW;
pub use errors::VaultError;
pub use events::{Initialized, ProposalExecuted, ProposalSubmitted};
pub use multisig::{MultisigVault, MultisigVaultClient};
pub use quorum::{SignatureRecovery, SignatureRecoveryClient};
pub use types::{DataKey, Proposal, TransferAsset, TxnKind};
