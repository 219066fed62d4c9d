use soroban_sdk::{Address, Env, Symbol};

pub fn deposited(env: &Env, to: Address, amount: i128) {
    let topics = (Symbol::new(env, "deposited"), to);
    env.events().publish(topics, (amount,));
}

pub fn withdrawn(env: &Env, from: Address, amount: i128) {
    let topics = (Symbol::new(env, "withdrawn"), from);
    env.events().publish(topics, (amount,));
}
