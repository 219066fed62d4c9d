use soroban_sdk::{assert_with_error, Address, Env};

use crate::error::ContractError;
use crate::storage_types::{AllowanceDataKey, AllowanceValue, DataKey};

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

/// Returns the allowance of `spender` over the funds of `from`. Expired allowances read as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    env.storage()
        .temporary()
        .get::<_, AllowanceValue>(&allowance_key(from, spender))
        .map_or(
            AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
            |allowance| {
                if allowance.expiration_ledger < env.ledger().sequence() {
                    AllowanceValue {
                        amount: 0,
                        expiration_ledger: allowance.expiration_ledger,
                    }
                } else {
                    allowance
                }
            },
        )
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let current_ledger = env.ledger().sequence();

    assert_with_error!(
        env,
        amount == 0 || expiration_ledger >= current_ledger,
        ContractError::InvalidExpirationLedger
    );

    let key = allowance_key(from, spender);
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };

    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - current_ledger;

        env.storage()
            .temporary()
            .extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(env, from, spender);

    assert_with_error!(
        env,
        allowance.amount >= amount,
        ContractError::InsufficientAllowance
    );

    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}
