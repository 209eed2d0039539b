use soroban_sdk::{contractevent, Address, BytesN};

use crate::types::TxnKind;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub signer_count: u32,
    pub threshold: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalSubmitted {
    #[topic]
    pub id: u64,
    pub proposer: BytesN<32>,
    pub kind: TxnKind,
    pub amount: i128,
    pub recipient: Address,
    pub expiration: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    #[topic]
    pub id: u64,
    pub kind: TxnKind,
    pub amount: i128,
    pub recipient: Address,
    pub signatures: u32,
}
