use custody_soroban_std::ttl::extend_persistent_ttl;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::error::ContractError;
use crate::storage_types::DataKey;

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());

    env.storage()
        .persistent()
        .get::<_, i128>(&key)
        .inspect(|_| extend_persistent_ttl(env, &key))
        .unwrap_or_default()
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());

    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(env, addr);

    write_balance(env, addr, balance + amount);
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(env, addr);

    assert_with_error!(env, balance >= amount, ContractError::InsufficientBalance);

    write_balance(env, addr, balance - amount);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or_default()
}

pub fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}
