use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidInput = 3,
    InvalidWindow = 4,
    StartImmutable = 5,
    UnknownRewardAsset = 6,
    DuplicateRewardAsset = 7,
    ControllerQueryFailed = 8,
    DebtorNotAllowed = 9,
    MathOverflow = 10,
}
