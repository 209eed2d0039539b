use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidThreshold = 3,
    EmptySignerSet = 4,
    DuplicateSigner = 5,
    NotASigner = 6,
    ZeroAmount = 7,
    TokenRequired = 8,
    TokenNotAllowed = 9,
    ExpirationInPast = 10,
    ProposalNotFound = 11,
    /// Either unrecoverable or recovered to an identity outside the signer set.
    InvalidSignature = 12,
    QuorumNotMet = 13,
    AlreadyExecuted = 14,
    TransactionExpired = 15,
    WrongTransactionKind = 16,
    TokenMismatch = 17,
}
