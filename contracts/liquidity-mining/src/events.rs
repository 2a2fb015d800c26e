use soroban_sdk::{contractevent, Address, Symbol, U256};

use crate::storage::{EmissionKind, TransferConvention};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminUpdated {
    #[topic]
    pub admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControllerUpdated {
    #[topic]
    pub controller: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAssetAdded {
    #[topic]
    pub asset: Address,
    pub convention: TransferConvention,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardScheduleUpdated {
    #[topic]
    pub asset: Address,
    #[topic]
    pub market: Address,
    pub kind: EmissionKind,
    pub speed_per_second: u128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardIndexUpdated {
    #[topic]
    pub asset: Address,
    #[topic]
    pub market: Address,
    pub kind: EmissionKind,
    pub index: U256,
    pub timestamp: u64,
}

/// Emitted when an account's share of a market's emission is credited.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardDistributed {
    #[topic]
    pub asset: Address,
    #[topic]
    pub account: Address,
    pub market: Address,
    pub kind: EmissionKind,
    pub delta: u128,
    pub index: U256,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaid {
    #[topic]
    pub asset: Address,
    #[topic]
    pub account: Address,
    pub recipient: Address,
    pub amount: u128,
}

/// Payout did not happen; the amount stays accrued for a later claim.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTransferSkipped {
    #[topic]
    pub asset: Address,
    #[topic]
    pub account: Address,
    pub amount: u128,
    pub reason: Symbol,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebtorUpdated {
    #[topic]
    pub account: Address,
    pub debtor: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsReceiverUpdated {
    #[topic]
    pub account: Address,
    pub receiver: Address,
}
