use soroban_sdk::{contractclient, Address, Bytes, Env};

use crate::error::ContractError;

#[contractclient(name = "AdvancedWrappedNativeClient")]
pub trait AdvancedWrappedNativeInterface {
    /// Returns the address of the wrapped native token this contract operates on.
    fn wrapped_native(env: &Env) -> Address;

    /// Takes `amount` of wrapped native tokens from `caller`, lets `target` draw from them during a call and
    /// refunds the remainder to `caller` as native value.
    ///
    /// `caller` must have approved this contract to spend at least `amount` on the wrapped native token.
    /// `target` is called through the [`SpendTargetInterface`](crate::SpendTargetInterface) with `payload`.
    ///
    /// # Notes
    /// - The whole call is aborted if the tokens can't be taken from `caller` or if `target` fails.
    /// - Fails with [`ContractError::WithdrawToCallFailed`] if `caller` refuses the refund.
    fn authorize_and_call(
        env: Env,
        caller: Address,
        amount: i128,
        target: Address,
        payload: Bytes,
    ) -> Result<(), ContractError>;

    /// Payable hook for native value sent with [`custody_soroban_std::native::send`]. Only accepts it from
    /// the wrapped native token, the invocation of any other sender fails.
    ///
    /// # Notes
    /// - A plain transfer on the native asset contract never calls this hook and can't be refused. Native
    ///   value arriving that way stays on the contract and is not unwrapped by [`Self::withdraw_to`].
    fn receive(env: Env, from: Address, amount: i128) -> Result<(), ContractError>;

    /// Unwraps the entire wrapped native balance held by this contract and sends it to `recipient` as native
    /// value. Does nothing if the balance is zero.
    ///
    /// # Notes
    /// - Callable by anyone, the balance isn't attributed to any depositor.
    /// - Sending to the wrapped native token itself wraps the value again, credited to this contract.
    fn withdraw_to(env: Env, recipient: Address) -> Result<(), ContractError>;
}
