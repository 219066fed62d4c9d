use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidAmount = 1,
    /// Native value can only be received from the wrapped native token
    WrappedNativeOnly = 2,
    /// The recipient did not accept the unwrapped native value
    WithdrawToCallFailed = 3,
}
