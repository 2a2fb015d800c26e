use soroban_sdk::{Address, Env, Vec};

use crate::debtors;
use crate::distribution;
use crate::interfaces::RiskControllerClient;
use crate::payout;
use crate::storage::{self, EmissionKind, MarketRewardReport};

fn controller_markets(env: &Env) -> Vec<Address> {
    RiskControllerClient::new(env, &storage::get_controller(env)).get_all_markets()
}

// Settles only keys that carry a schedule; returns whether it did
fn settle_if_scheduled(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    account: &Address,
) -> bool {
    if storage::get_schedule(env, asset, market, kind).is_none() {
        return false;
    }
    distribution::settle(env, asset, market, kind, account);
    true
}

/// Settles every registered asset across every controller market, then pays.
pub fn claim_all(env: &Env, account: &Address) {
    debtors::ensure_not_debtor(env, account);

    let markets = controller_markets(env);
    for asset in storage::get_reward_assets(env).iter() {
        for market in markets.iter() {
            settle_if_scheduled(env, &asset, &market, EmissionKind::Supply, account);
            settle_if_scheduled(env, &asset, &market, EmissionKind::Borrow, account);
        }
        payout::pay_accrued(env, &asset, account);
    }
}

/// Settles the listed (asset, market) pairs for the listed accounts, then pays
/// each account every listed asset.
pub fn claim(
    env: &Env,
    accounts: &Vec<Address>,
    markets: &Vec<Address>,
    assets: &Vec<Address>,
    supply: bool,
    borrow: bool,
) {
    debtors::ensure_none_debtor(env, accounts);
    for asset in assets.iter() {
        storage::ensure_reward_asset(env, &asset);
    }

    for asset in assets.iter() {
        for market in markets.iter() {
            if supply {
                distribution::settle_accounts(env, &asset, &market, EmissionKind::Supply, accounts);
            }
            if borrow {
                distribution::settle_accounts(env, &asset, &market, EmissionKind::Borrow, accounts);
            }
        }
        for account in accounts.iter() {
            payout::pay_accrued(env, &asset, &account);
        }
    }
}

/// Claims one asset across every controller market and reports which sides
/// were settled per market.
pub fn claim_single(env: &Env, account: &Address, asset: &Address) -> Vec<MarketRewardReport> {
    debtors::ensure_not_debtor(env, account);
    storage::ensure_reward_asset(env, asset);

    let mut report = Vec::new(env);
    for market in controller_markets(env).iter() {
        let supply = settle_if_scheduled(env, asset, &market, EmissionKind::Supply, account);
        let borrow = settle_if_scheduled(env, asset, &market, EmissionKind::Borrow, account);
        report.push_back(MarketRewardReport {
            market,
            supply,
            borrow,
        });
    }
    payout::pay_accrued(env, asset, account);
    report
}
