use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::Error;
use crate::events::DebtorUpdated;
use crate::interfaces::RiskControllerClient;
use crate::storage;

/// Refreshes the cached debtor flag of every account from the risk controller.
///
/// All accounts are queried before any flag is written, so a failing query
/// leaves every flag as it was.
pub fn update_debtors(env: &Env, accounts: &Vec<Address>) {
    let controller = RiskControllerClient::new(env, &storage::get_controller(env));

    let mut flags: Vec<bool> = Vec::new(env);
    for account in accounts.iter() {
        let shortfall = match controller.try_get_account_liquidity(&account) {
            Ok(Ok((0, _liquidity, shortfall))) => shortfall,
            _ => panic_with_error!(env, Error::ControllerQueryFailed),
        };
        flags.push_back(shortfall > 0);
    }

    for (account, debtor) in accounts.iter().zip(flags.iter()) {
        if storage::is_debtor(env, &account) == debtor {
            continue;
        }
        storage::set_debtor(env, &account, debtor);
        DebtorUpdated { account, debtor }.publish(env);
    }
}

pub fn ensure_not_debtor(env: &Env, account: &Address) {
    if storage::is_debtor(env, account) {
        panic_with_error!(env, Error::DebtorNotAllowed);
    }
}

pub fn ensure_none_debtor(env: &Env, accounts: &Vec<Address>) {
    for account in accounts.iter() {
        ensure_not_debtor(env, &account);
    }
}
