#![cfg(any(test, feature = "testutils"))]
extern crate std;

use soroban_sdk::{
    testutils::{AuthorizedFunction, AuthorizedInvocation, Events},
    token::TokenClient,
    vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

/// Asserts invocation auth of a contract from a single caller.
pub fn assert_invocation<T>(
    env: &Env,
    caller: &Address,
    contract_id: &Address,
    function_name: &str,
    args: T,
) where
    T: IntoVal<Env, Vec<Val>>,
{
    assert_eq!(
        env.auths(),
        std::vec![(
            caller.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    contract_id.clone(),
                    Symbol::new(env, function_name),
                    args.into_val(env),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
}

/// Asserts that the most recent event was published by `contract_id` with the given topics and data.
pub fn assert_last_emitted_event<U, V>(env: &Env, contract_id: &Address, topics: U, data: V)
where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    let event = env
        .events()
        .all()
        .last()
        .expect("no events were emitted");

    assert_eq!(event.0, contract_id.clone());
    assert_eq!(event.1, topics.into_val(env));
    assert_eq!(vec![env, event.2], vec![env, data.into_val(env)]);
}

/// Asserts the balance of every listed holder on `token`.
pub fn assert_balances(token: &TokenClient, expected: &[(&Address, i128)]) {
    for (holder, amount) in expected {
        assert_eq!(
            token.balance(holder),
            *amount,
            "unexpected balance of {:?} on token {:?}",
            holder,
            token.address
        );
    }
}

/// Asserts that `holder` has no balance left on any of the given tokens.
pub fn assert_holds_nothing(env: &Env, holder: &Address, tokens: &[&Address]) {
    for token in tokens {
        assert_balances(&TokenClient::new(env, token), &[(holder, 0)]);
    }
}
