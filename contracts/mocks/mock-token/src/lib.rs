#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

#[contracttype]
enum DataKey {
    Initialized,
    TransfersBlocked,
}

/// SEP-41 reward token for tests. `transfer` returns nothing on success and
/// can be switched to always fail, to model an uncooperative reward asset.
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn initialize(env: Env, name: String, symbol: String, decimals: u32) {
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::Initialized)
            .is_some()
        {
            panic!("already initialized");
        }
        TokenBase::set_metadata(&env, decimals, name, symbol);
        env.storage().persistent().set(&DataKey::Initialized, &true);
    }

    pub fn decimals(env: Env) -> u32 {
        TokenBase::decimals(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, who: Address) -> i128 {
        TokenBase::balance(&env, &who)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        if Self::transfers_blocked(env.clone()) {
            panic!("transfers blocked");
        }
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer(&env, &from, &to, amount);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::mint(&env, &to, amount);
    }

    pub fn set_transfers_blocked(env: Env, blocked: bool) {
        env.storage()
            .persistent()
            .set(&DataKey::TransfersBlocked, &blocked);
    }

    pub fn transfers_blocked(env: Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::TransfersBlocked)
            .unwrap_or(false)
    }
}
