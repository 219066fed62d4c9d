use custody_soroban_std::traits::ThenOk;
use custody_soroban_std::{ensure, native, ttl::extend_instance_ttl};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env};
use wrapped_native::WrappedNativeClient;

use crate::error::ContractError;
use crate::event;
use crate::interface::AdvancedWrappedNativeInterface;
use crate::storage_types::DataKey;
use crate::target::SpendTargetClient;

#[contract]
pub struct AdvancedWrappedNative;

#[contractimpl]
impl AdvancedWrappedNative {
    /// Initialize the contract with the wrapped native token it operates on. It can't be changed afterwards.
    pub fn __constructor(env: Env, wrapped_native: Address) {
        env.storage()
            .instance()
            .set(&DataKey::WrappedNative, &wrapped_native);
    }
}

impl AdvancedWrappedNative {
    /// Unwraps `amount` of the tokens held by this contract and forwards the native value it received to
    /// `recipient`. Returns the amount forwarded.
    fn unwrap_to(env: &Env, recipient: &Address, amount: i128) -> Result<i128, ContractError> {
        let this = env.current_contract_address();
        let wrapped_native = WrappedNativeClient::new(env, &Self::wrapped_native(env));
        let native = TokenClient::new(env, &wrapped_native.native());

        let native_before = native.balance(&this);
        wrapped_native.withdraw(&this, &amount);
        let unwrapped = native.balance(&this) - native_before;

        native::send(env, &native.address, recipient, unwrapped)
            .map_err(|_| ContractError::WithdrawToCallFailed)?;

        Ok(unwrapped)
    }
}

#[contractimpl]
impl AdvancedWrappedNativeInterface for AdvancedWrappedNative {
    fn wrapped_native(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::WrappedNative)
            .expect("wrapped native must be set during contract construction")
    }

    fn authorize_and_call(
        env: Env,
        caller: Address,
        amount: i128,
        target: Address,
        payload: Bytes,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        ensure!(amount >= 0, ContractError::InvalidAmount);
        extend_instance_ttl(&env);

        let this = env.current_contract_address();
        let wrapped_native = Self::wrapped_native(&env);
        let token = TokenClient::new(&env, &wrapped_native);

        token.transfer_from(&this, &caller, &this, &amount);

        // the target's allowance must not outlive the call
        let expiration_ledger = env.ledger().sequence();
        token.approve(&this, &target, &amount, &expiration_ledger);
        SpendTargetClient::new(&env, &target).on_authorized(
            &this,
            &wrapped_native,
            &amount,
            &payload,
        );
        token.approve(&this, &target, &0, &expiration_ledger);

        let remainder = token.balance(&this);
        let refunded = if remainder > 0 {
            Self::unwrap_to(&env, &caller, remainder)?
        } else {
            log!(&env, "target drew the full amount, nothing to refund");
            0
        };

        event::called(&env, caller, target, amount, refunded);

        Ok(())
    }

    fn receive(env: Env, from: Address, _amount: i128) -> Result<(), ContractError> {
        (from == Self::wrapped_native(&env)).then_ok((), ContractError::WrappedNativeOnly)?;

        from.require_auth();

        Ok(())
    }

    fn withdraw_to(env: Env, recipient: Address) -> Result<(), ContractError> {
        let token = TokenClient::new(&env, &Self::wrapped_native(&env));
        let balance = token.balance(&env.current_contract_address());

        if balance == 0 {
            return Ok(());
        }

        extend_instance_ttl(&env);

        let unwrapped = Self::unwrap_to(&env, &recipient, balance)?;

        event::withdrawn(&env, recipient, unwrapped);

        Ok(())
    }
}
