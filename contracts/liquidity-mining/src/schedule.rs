use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::accrual;
use crate::errors::Error;
use crate::events::RewardScheduleUpdated;
use crate::storage::{self, EmissionKind, RewardSpeedSchedule};

/// Column-wise schedule batch as it arrives from the admin.
pub struct ScheduleBatch {
    pub markets: Vec<Address>,
    pub speeds: Vec<u128>,
    pub starts: Vec<u64>,
    pub ends: Vec<u64>,
}

impl ScheduleBatch {
    fn checked_len(&self, env: &Env) -> u32 {
        let len = self.markets.len();
        if len == 0
            || self.speeds.len() != len
            || self.starts.len() != len
            || self.ends.len() != len
        {
            panic_with_error!(env, Error::InvalidInput);
        }
        len
    }

    fn entry(&self, i: u32) -> (Address, RewardSpeedSchedule) {
        (
            self.markets.get_unchecked(i),
            RewardSpeedSchedule {
                speed_per_second: self.speeds.get_unchecked(i),
                start_time: self.starts.get_unchecked(i),
                end_time: self.ends.get_unchecked(i),
            },
        )
    }
}

/// Applies a batch of schedules for one reward asset. Any invalid entry aborts
/// the whole batch.
pub fn set_schedules(env: &Env, asset: &Address, kind: EmissionKind, batch: &ScheduleBatch) {
    let len = batch.checked_len(env);
    storage::ensure_reward_asset(env, asset);

    let now = env.ledger().timestamp();
    for i in 0..len {
        let (market, next) = batch.entry(i);
        apply(env, asset, &market, kind, &next, now);
    }
}

fn validate(env: &Env, current: Option<&RewardSpeedSchedule>, next: &RewardSpeedSchedule, now: u64) {
    match current {
        Some(current) if current.in_flight(now) => {
            // Running window: only speed and end may change, and the end cannot move into the past
            if next.start_time != current.start_time {
                panic_with_error!(env, Error::StartImmutable);
            }
            if next.end_time < now {
                panic_with_error!(env, Error::InvalidWindow);
            }
        }
        _ => {
            if next.end_time <= next.start_time || next.end_time <= now {
                panic_with_error!(env, Error::InvalidWindow);
            }
        }
    }
}

fn apply(
    env: &Env,
    asset: &Address,
    market: &Address,
    kind: EmissionKind,
    next: &RewardSpeedSchedule,
    now: u64,
) {
    let current = storage::get_schedule(env, asset, market, kind);
    validate(env, current.as_ref(), next, now);

    match current {
        Some(_) => accrual::checkpoint_before_edit(env, asset, market, kind),
        None => accrual::open_state(env, asset, market, kind),
    }
    storage::set_schedule(env, asset, market, kind, next);

    RewardScheduleUpdated {
        asset: asset.clone(),
        market: market.clone(),
        kind,
        speed_per_second: next.speed_per_second,
        start_time: next.start_time,
        end_time: next.end_time,
    }
    .publish(env);
}
