use soroban_sdk::{contracttype, panic_with_error, Address, Env, IntoVal, Val, Vec, U256};

use crate::constants::INITIAL_INDEX;
use crate::errors::Error;

// Storage key types for the contract
#[contracttype]
pub enum DataKey {
    Admin,                                  // Address
    Controller,                             // Address of the risk controller
    LayoutVersion,                          // u32
    RewardAssets,                           // Vec<Address>, registration order
    RewardConvention(Address),              // TransferConvention per registered asset
    Schedule(Address, Address, EmissionKind), // (asset, market, kind) -> RewardSpeedSchedule
    GlobalState(Address, Address, EmissionKind), // (asset, market, kind) -> GlobalRewardState
    AccountIndex(Address, Address, EmissionKind, Address), // (asset, market, kind, account) -> U256
    Accrued(Address, Address),              // (asset, account) -> u128
    Debtor(Address),                        // bool
    RewardsReceiver(Address),               // Address
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmissionKind {
    Supply,
    Borrow,
}

/// How a reward asset reports the outcome of `transfer`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferConvention {
    /// Stellar Asset Contract (native XLM or a classic asset).
    Native,
    /// SEP-41 token: `transfer` returns nothing and traps on failure.
    Standard,
    /// Legacy token whose `transfer` returns `false` instead of trapping.
    BoolReturning,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSpeedSchedule {
    pub speed_per_second: u128,
    pub start_time: u64,
    pub end_time: u64,
}

impl RewardSpeedSchedule {
    /// Emission has begun and the window is still open.
    pub fn in_flight(&self, now: u64) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalRewardState {
    // Kept at 256 bits: a thin market can push the per-unit ratio past u128
    pub index: U256,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketRewardReport {
    pub market: Address,
    pub supply: bool,
    pub borrow: bool,
}

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

pub fn require_admin(env: &Env) -> Address {
    let admin = get_admin(env);
    bump_core_ttl(env);
    admin.require_auth();
    admin
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    if persistent.has(&DataKey::Admin) {
        persistent.extend_ttl(&DataKey::Admin, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::Controller) {
        persistent.extend_ttl(&DataKey::Controller, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::LayoutVersion) {
        persistent.extend_ttl(&DataKey::LayoutVersion, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::RewardAssets) {
        persistent.extend_ttl(&DataKey::RewardAssets, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    let persistent = env.storage().persistent();
    persistent.set(key, value);
    persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_admin(env: &Env, admin: &Address) {
    write(env, &DataKey::Admin, admin);
}

pub fn get_controller(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Controller)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_controller(env: &Env, controller: &Address) {
    write(env, &DataKey::Controller, controller);
}

pub fn get_layout_version(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::LayoutVersion)
        .unwrap_or(0u32)
}

pub fn set_layout_version(env: &Env, version: u32) {
    write(env, &DataKey::LayoutVersion, &version);
}

// Reward assets

pub fn get_reward_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RewardAssets)
        .unwrap_or(Vec::new(env))
}

pub fn get_reward_convention(env: &Env, asset: &Address) -> Option<TransferConvention> {
    env.storage()
        .persistent()
        .get(&DataKey::RewardConvention(asset.clone()))
}

pub fn is_reward_asset(env: &Env, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::RewardConvention(asset.clone()))
}

pub fn push_reward_asset(env: &Env, asset: &Address, convention: TransferConvention) {
    let mut assets = get_reward_assets(env);
    assets.push_back(asset.clone());
    write(env, &DataKey::RewardAssets, &assets);
    write(env, &DataKey::RewardConvention(asset.clone()), &convention);
}

pub fn ensure_reward_asset(env: &Env, asset: &Address) {
    if !is_reward_asset(env, asset) {
        panic_with_error!(env, Error::UnknownRewardAsset);
    }
}

// Schedules and indexes

pub fn get_schedule(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
) -> Option<RewardSpeedSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedule(asset.clone(), market.clone(), kind))
}

pub fn set_schedule(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    schedule: &RewardSpeedSchedule,
) {
    write(
        env,
        &DataKey::Schedule(asset.clone(), market.clone(), kind),
        schedule,
    );
}

pub fn get_global_state(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
) -> Option<GlobalRewardState> {
    env.storage()
        .persistent()
        .get(&DataKey::GlobalState(asset.clone(), market.clone(), kind))
}

/// Stored state, or a fresh index for keys that were never scheduled.
pub fn global_state_or_initial(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
) -> GlobalRewardState {
    get_global_state(env, asset, market, kind).unwrap_or(GlobalRewardState {
        index: U256::from_u128(env, INITIAL_INDEX),
        timestamp: 0,
    })
}

pub fn set_global_state(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    state: &GlobalRewardState,
) {
    write(
        env,
        &DataKey::GlobalState(asset.clone(), market.clone(), kind),
        state,
    );
}

pub fn get_account_index(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    account: &Address,
) -> Option<U256> {
    env.storage().persistent().get(&DataKey::AccountIndex(
        asset.clone(),
        market.clone(),
        kind,
        account.clone(),
    ))
}

pub fn set_account_index(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    account: &Address,
    index: &U256,
) {
    write(
        env,
        &DataKey::AccountIndex(asset.clone(), market.clone(), kind, account.clone()),
        index,
    );
}

// Accrued balances

pub fn get_accrued(env: &Env, asset: &Address, account: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Accrued(asset.clone(), account.clone()))
        .unwrap_or(0u128)
}

pub fn set_accrued(env: &Env, asset: &Address, account: &Address, amount: u128) {
    write(
        env,
        &DataKey::Accrued(asset.clone(), account.clone()),
        &amount,
    );
}

// Debtors and receivers

pub fn is_debtor(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Debtor(account.clone()))
        .unwrap_or(false)
}

pub fn set_debtor(env: &Env, account: &Address, debtor: bool) {
    write(env, &DataKey::Debtor(account.clone()), &debtor);
}

pub fn get_rewards_receiver(env: &Env, account: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RewardsReceiver(account.clone()))
}

pub fn set_rewards_receiver(env: &Env, account: &Address, receiver: &Address) {
    write(env, &DataKey::RewardsReceiver(account.clone()), receiver);
}
