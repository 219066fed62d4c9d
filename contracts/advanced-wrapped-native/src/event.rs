use soroban_sdk::{Address, Env, Symbol};

pub fn called(env: &Env, caller: Address, target: Address, amount: i128, refunded: i128) {
    let topics = (Symbol::new(env, "called"), caller, target);
    env.events().publish(topics, (amount, refunded));
}

pub fn withdrawn(env: &Env, recipient: Address, amount: i128) {
    let topics = (Symbol::new(env, "withdrawn"), recipient);
    env.events().publish(topics, (amount,));
}
