use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    NativeAsset,
    Recovery,
    Initialized,
    Signers,
    Signer(BytesN<32>),
    Threshold,
    TxnId,
    Txn(u64),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TxnKind {
    NativeTransfer = 0,
    TokenTransfer = 1,
}

/// What a proposal moves. The token contract travels with the variant, so a
/// token transfer can never be stored without one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TransferAsset {
    Native,
    Token(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: BytesN<32>,
    pub asset: TransferAsset,
    pub amount: i128,
    pub recipient: Address,
    pub submitted_at: u32,
    pub expiration: u32,
    pub executed: bool,
}

impl Proposal {
    pub fn kind(&self) -> TxnKind {
        match self.asset {
            TransferAsset::Native => TxnKind::NativeTransfer,
            TransferAsset::Token(_) => TxnKind::TokenTransfer,
        }
    }

    pub fn token(&self) -> Option<Address> {
        match &self.asset {
            TransferAsset::Native => None,
            TransferAsset::Token(token) => Some(token.clone()),
        }
    }
}
