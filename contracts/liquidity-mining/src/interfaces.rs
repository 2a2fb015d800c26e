use soroban_sdk::{Address, Env, Vec};

/// Read surface of a lending market the rewards engine meters against.
#[allow(dead_code)]
#[soroban_sdk::contractclient(name = "LendingMarketClient")]
pub trait LendingMarket {
    fn get_total_ptokens(e: Env) -> u128;
    fn get_total_borrowed(e: Env) -> u128;
    fn get_borrow_index(e: Env) -> u128;
    fn get_ptoken_balance(e: Env, user: Address) -> u128;
    fn get_user_borrow_balance(e: Env, user: Address) -> u128;
}

/// Risk controller: market registry and account solvency.
#[allow(dead_code)]
#[soroban_sdk::contractclient(name = "RiskControllerClient")]
pub trait RiskController {
    fn get_all_markets(e: Env) -> Vec<Address>;
    // (error code, liquidity, shortfall); a non-zero code means the query failed
    fn get_account_liquidity(e: Env, account: Address) -> (u32, u128, u128);
}
