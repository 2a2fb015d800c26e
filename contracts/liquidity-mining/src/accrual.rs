use soroban_sdk::{Address, Env};

use crate::constants::INITIAL_INDEX;
use crate::events::RewardIndexUpdated;
use crate::helpers::{index_ratio, normalize_by_index, wide};
use crate::interfaces::LendingMarketClient;
use crate::storage::{self, EmissionKind, GlobalRewardState};

/// Total participation the emission of one second is shared across.
/// Borrow totals are taken in index-free units.
fn participation_total(env: &Env, market: &Address, kind: EmissionKind) -> u128 {
    let market = LendingMarketClient::new(env, market);
    match kind {
        EmissionKind::Supply => market.get_total_ptokens(),
        EmissionKind::Borrow => {
            normalize_by_index(env, market.get_total_borrowed(), market.get_borrow_index())
        }
    }
}

/// Brings the global index of `(asset, market, kind)` up to the current ledger
/// time, emitting only inside the scheduled window.
///
/// The stored timestamp never moves past the schedule end, so a later
/// extension starts emitting from where the previous window stopped.
pub fn accrue_global_index(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
) -> GlobalRewardState {
    let mut state = storage::global_state_or_initial(env, asset, market, kind);
    let Some(schedule) = storage::get_schedule(env, asset, market, kind) else {
        return state;
    };

    let now = env.ledger().timestamp();
    let window_end = now.min(schedule.end_time);
    let window_start = state.timestamp.max(schedule.start_time);
    let mut index_moved = false;

    if schedule.speed_per_second > 0 && window_end > window_start {
        let ratio = index_ratio(
            env,
            schedule.speed_per_second,
            window_end - window_start,
            participation_total(env, market, kind),
        );
        if ratio > wide(env, 0) {
            state.index = state.index.add(&ratio);
            index_moved = true;
        }
    }

    let checkpoint = state.timestamp.max(window_end);
    if index_moved || checkpoint != state.timestamp {
        state.timestamp = checkpoint;
        storage::set_global_state(env, asset, market, kind, &state);
    }
    if index_moved {
        RewardIndexUpdated {
            asset: asset.clone(),
            market: market.clone(),
            kind,
            index: state.index.clone(),
            timestamp: state.timestamp,
        }
        .publish(env);
    }
    state
}

/// Folds the outgoing schedule into the index and stamps the state with the
/// current time before a schedule is replaced.
pub fn checkpoint_before_edit(env: &Env, asset: &Address, market: &Address, kind: EmissionKind) {
    let mut state = accrue_global_index(env, asset, market, kind);
    let now = env.ledger().timestamp();
    if now > state.timestamp {
        state.timestamp = now;
        storage::set_global_state(env, asset, market, kind, &state);
    }
}

/// Creates the global state for a key receiving its first schedule.
pub fn open_state(env: &Env, asset: &Address, market: &Address, kind: EmissionKind) {
    if storage::get_global_state(env, asset, market, kind).is_some() {
        checkpoint_before_edit(env, asset, market, kind);
        return;
    }
    let state = GlobalRewardState {
        index: wide(env, INITIAL_INDEX),
        timestamp: env.ledger().timestamp(),
    };
    storage::set_global_state(env, asset, market, kind, &state);
}
