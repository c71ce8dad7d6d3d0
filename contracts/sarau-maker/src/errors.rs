use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization
    NotAuthorized = 3,

    // Creation parameter validation
    InvalidStartDate = 4,
    InvalidEndDate = 5,
    EndBeforeStart = 6,
    IncorrectFee = 7,
    FeeOverflow = 8,

    // Mint state machine
    OutsideMintWindow = 9,
    AlreadyMinted = 10,
    MaxMintReached = 11,
    InvalidMintCode = 12,
    UnknownSarau = 13,

    // Oracle
    OracleVerificationFailed = 14,
    PriceUnavailable = 15,
}
