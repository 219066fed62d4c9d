use custody_soroban_std::token::validate_token_metadata;
use custody_soroban_std::{ensure, ttl::extend_instance_ttl};
use soroban_sdk::token::{TokenClient, TokenInterface};
use soroban_sdk::{
    assert_with_error, contract, contractimpl, panic_with_error, Address, Env, String,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    read_balance, read_total_supply, receive_balance, spend_balance, write_total_supply,
};
use crate::error::ContractError;
use crate::event;
use crate::interface::WrappedNativeInterface;
use crate::storage_types::DataKey;

#[contract]
pub struct WrappedNative;

#[contractimpl]
impl WrappedNative {
    /// Initialize the token with the native asset it wraps and its metadata.
    pub fn __constructor(env: Env, native: Address, decimal: u32, name: String, symbol: String) {
        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };

        if let Err(err) = validate_token_metadata(&metadata) {
            panic_with_error!(env, err);
        }

        TokenUtils::new(&env).metadata().set_metadata(&metadata);
        env.storage().instance().set(&DataKey::Native, &native);
        write_total_supply(&env, 0);
    }
}

impl WrappedNative {
    fn native_client(env: &Env) -> TokenClient<'_> {
        TokenClient::new(env, &Self::native(env))
    }

    fn validate_amount(env: &Env, amount: i128) {
        assert_with_error!(env, amount >= 0, ContractError::InvalidAmount);
    }

    fn mint(env: &Env, to: &Address, amount: i128) {
        receive_balance(env, to, amount);
        write_total_supply(env, read_total_supply(env) + amount);
    }

    fn burn_balance(env: &Env, from: &Address, amount: i128) {
        spend_balance(env, from, amount);
        write_total_supply(env, read_total_supply(env) - amount);
    }
}

#[contractimpl]
impl TokenInterface for WrappedNative {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        write_allowance(&env, &from, &spender, amount, expiration_ledger);

        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        spend_allowance(&env, &from, &spender, amount);
        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        Self::burn_balance(&env, &from, amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        spend_allowance(&env, &from, &spender, amount);
        Self::burn_balance(&env, &from, amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}

#[contractimpl]
impl WrappedNativeInterface for WrappedNative {
    fn native(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Native)
            .expect("native asset must be set during contract construction")
    }

    fn total_supply(env: &Env) -> i128 {
        read_total_supply(env)
    }

    fn deposit(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        Self::native_client(&env).transfer(&from, &env.current_contract_address(), &amount);
        Self::mint(&env, &from, amount);

        event::deposited(&env, from, amount);

        Ok(())
    }

    fn withdraw(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        Self::burn_balance(&env, &from, amount);
        Self::native_client(&env).transfer(&env.current_contract_address(), &from, &amount);

        event::withdrawn(&env, from, amount);

        Ok(())
    }

    fn receive(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();

        Self::validate_amount(&env, amount);
        extend_instance_ttl(&env);

        let reserve = Self::native_client(&env).balance(&env.current_contract_address());
        let surplus = reserve - read_total_supply(&env);

        ensure!(amount <= surplus, ContractError::InsufficientSurplus);

        Self::mint(&env, &from, amount);

        event::deposited(&env, from, amount);

        Ok(())
    }
}
