use soroban_sdk::{Address, Env, Vec, U256};

use crate::accrual;
use crate::events::RewardDistributed;
use crate::helpers::{checked_add, index_share, normalize_by_index};
use crate::interfaces::LendingMarketClient;
use crate::storage::{self, EmissionKind};

fn account_participation(
    env: &Env,
    market: &Address,
    kind: EmissionKind,
    account: &Address,
) -> u128 {
    let market = LendingMarketClient::new(env, market);
    match kind {
        EmissionKind::Supply => market.get_ptoken_balance(account),
        EmissionKind::Borrow => normalize_by_index(
            env,
            market.get_user_borrow_balance(account),
            market.get_borrow_index(),
        ),
    }
}

/// Credits `account` with its share of the index growth since its last
/// settlement and moves its index to `global_index`. Returns the credit.
///
/// An account seen for the first time starts at the current global index and
/// earns nothing for emission that happened before it was tracked.
pub fn distribute(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    account: &Address,
    global_index: &U256,
) -> u128 {
    let account_index = match storage::get_account_index(env, asset, market, kind, account) {
        Some(index) => index,
        None => {
            storage::set_account_index(env, asset, market, kind, account, global_index);
            return 0;
        }
    };
    if account_index >= *global_index {
        return 0;
    }

    let participation = account_participation(env, market, kind, account);
    let delta = index_share(env, &global_index.sub(&account_index), participation);
    if delta > 0 {
        let accrued = storage::get_accrued(env, asset, account);
        storage::set_accrued(env, asset, account, checked_add(env, accrued, delta));
    }
    storage::set_account_index(env, asset, market, kind, account, global_index);

    RewardDistributed {
        asset: asset.clone(),
        account: account.clone(),
        market: market.clone(),
        kind,
        delta,
        index: global_index.clone(),
    }
    .publish(env);
    delta
}

/// Accrues the global index, then settles a single account.
pub fn settle(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    account: &Address,
) -> u128 {
    let state = accrual::accrue_global_index(env, asset, market, kind);
    distribute(env, asset, market, kind, account, &state.index)
}

/// Accrues the global index once and settles every account against it.
pub fn settle_accounts(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    accounts: &Vec<Address>,
) {
    let state = accrual::accrue_global_index(env, asset, market, kind);
    for account in accounts.iter() {
        distribute(env, asset, market, kind, &account, &state.index);
    }
}
