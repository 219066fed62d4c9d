use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidAmount = 1,
    InsufficientBalance = 2,
    InsufficientAllowance = 3,
    InvalidExpirationLedger = 4,
    /// Not enough unaccounted native value held by the contract to back the credit
    InsufficientSurplus = 5,
}
