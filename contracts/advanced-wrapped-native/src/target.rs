use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Interface a contract implements to be paid through the advanced wrapped native contract.
#[contractclient(name = "SpendTargetClient")]
pub trait SpendTargetInterface {
    /// Called with an allowance of `budget` on `token` granted by `from` for the duration of the call.
    ///
    /// # Notes
    /// - The callee draws what it needs with `transfer_from(callee, from, callee, amount)` on `token`.
    ///   Whatever it leaves behind is refunded to the original caller as native value.
    /// - `payload` is forwarded untouched from the original caller.
    /// - Failing aborts the whole call, including the transfer of the caller's tokens.
    fn on_authorized(env: Env, from: Address, token: Address, budget: i128, payload: Bytes);
}
