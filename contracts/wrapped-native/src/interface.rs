use soroban_sdk::{contractclient, token::TokenInterface, Address, Env};

use crate::error::ContractError;

/// Interface of a token that wraps a native asset one-to-one.
///
/// Besides the standard token interface, holders can deposit native value to mint wrapped
/// tokens and withdraw wrapped tokens to get native value back.
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNativeInterface: TokenInterface {
    /// Returns the address of the native asset contract backing the token.
    fn native(env: &Env) -> Address;

    /// Returns the amount of wrapped tokens in circulation.
    fn total_supply(env: &Env) -> i128;

    /// Takes `amount` of native value from `from` and credits `from` with the same amount of wrapped tokens.
    fn deposit(env: Env, from: Address, amount: i128) -> Result<(), ContractError>;

    /// Burns `amount` of wrapped tokens held by `from` and sends the same amount of native value to `from`
    /// within the same call.
    fn withdraw(env: Env, from: Address, amount: i128) -> Result<(), ContractError>;

    /// Payable hook, invoked by a sender right after it transferred `amount` of native value to this contract.
    ///
    /// # Notes
    /// - `from` is credited with `amount` wrapped tokens, so sending native value to this contract wraps it
    ///   for the sender.
    /// - The credit is backed by the native value the contract holds on top of the total supply. Native value
    ///   transferred without calling this hook in the same invocation can be claimed by whoever calls it first.
    fn receive(env: Env, from: Address, amount: i128) -> Result<(), ContractError>;
}
