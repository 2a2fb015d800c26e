#![no_std]

mod accrual;
mod claims;
mod constants;
mod contract;
mod debtors;
mod distribution;
mod errors;
mod events;
mod helpers;
mod interfaces;
mod payout;
mod schedule;
mod storage;

pub use constants::{INITIAL_INDEX, LAYOUT_VERSION, PRECISION};
pub use contract::{LiquidityMining, LiquidityMiningClient};
pub use errors::Error;
pub use storage::{
    EmissionKind, GlobalRewardState, MarketRewardReport, RewardSpeedSchedule, TransferConvention,
};
