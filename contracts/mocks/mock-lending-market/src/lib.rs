#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
enum DataKey {
    TotalPTokens,
    TotalBorrowed,
    BorrowIndex,
    PTokenBalance(Address),
    BorrowBalance(Address),
}

const INDEX_SCALE_1E18: u128 = 1_000_000_000_000_000_000u128;

/// Lending market stand-in exposing the read surface the rewards engine
/// consumes. Every figure is set directly by the test.
#[contract]
pub struct MockLendingMarket;

#[contractimpl]
impl MockLendingMarket {
    pub fn set_total_ptokens(env: Env, total: u128) {
        env.storage().persistent().set(&DataKey::TotalPTokens, &total);
    }

    pub fn set_total_borrowed(env: Env, total: u128) {
        env.storage()
            .persistent()
            .set(&DataKey::TotalBorrowed, &total);
    }

    pub fn set_borrow_index(env: Env, index: u128) {
        env.storage().persistent().set(&DataKey::BorrowIndex, &index);
    }

    pub fn set_ptoken_balance(env: Env, user: Address, balance: u128) {
        env.storage()
            .persistent()
            .set(&DataKey::PTokenBalance(user), &balance);
    }

    pub fn set_user_borrow_balance(env: Env, user: Address, balance: u128) {
        env.storage()
            .persistent()
            .set(&DataKey::BorrowBalance(user), &balance);
    }

    pub fn get_total_ptokens(env: Env) -> u128 {
        read_u128(&env, &DataKey::TotalPTokens)
    }

    pub fn get_total_borrowed(env: Env) -> u128 {
        read_u128(&env, &DataKey::TotalBorrowed)
    }

    // Unset index reads as 1.0, like a freshly initialized market
    pub fn get_borrow_index(env: Env) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::BorrowIndex)
            .unwrap_or(INDEX_SCALE_1E18)
    }

    pub fn get_ptoken_balance(env: Env, user: Address) -> u128 {
        read_u128(&env, &DataKey::PTokenBalance(user))
    }

    pub fn get_user_borrow_balance(env: Env, user: Address) -> u128 {
        read_u128(&env, &DataKey::BorrowBalance(user))
    }
}

fn read_u128(env: &Env, key: &DataKey) -> u128 {
    env.storage().persistent().get(key).unwrap_or(0u128)
}
