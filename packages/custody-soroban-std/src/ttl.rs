use soroban_sdk::{Env, IntoVal, Val};

/// Parameters for extending the contract instance and its instance storage.
///
/// If the instance's time to live falls below 14 days, it will be extended by 60 days.
pub const LEDGERS_PER_DAY: u32 = (24 * 3600) / 5;
pub const INSTANCE_TTL_THRESHOLD: u32 = 14 * LEDGERS_PER_DAY;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 60 * LEDGERS_PER_DAY;

/// Balances are kept alive for longer than the instance, a holder may not touch them for months.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 30 * LEDGERS_PER_DAY;
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 120 * LEDGERS_PER_DAY;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

/// Extends the TTL of a persistent entry. The entry must exist.
pub fn extend_persistent_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}
