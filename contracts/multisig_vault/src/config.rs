use soroban_sdk::{Address, Env};

use crate::types::DataKey;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Ledgers a proposal stays executable when submitted without an expiration.
pub const DEFAULT_EXPIRATION_WINDOW: u32 = 1008;

pub fn store(env: &Env, admin: &Address, native_asset: &Address, recovery: &Address) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Admin, admin);
    storage.set(&DataKey::NativeAsset, native_asset);
    storage.set(&DataKey::Recovery, recovery);
    extend_instance(env);
}

// The three addresses below are written by the constructor, so they are
// always present once the contract exists.

pub fn admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn native_asset(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::NativeAsset).unwrap()
}

pub fn recovery(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Recovery).unwrap()
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}
