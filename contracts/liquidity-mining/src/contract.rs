use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, Vec, U256};

use crate::accrual;
use crate::claims;
use crate::constants::LAYOUT_VERSION;
use crate::debtors;
use crate::distribution;
use crate::errors::Error;
use crate::events::{AdminUpdated, ControllerUpdated, RewardAssetAdded, RewardsReceiverUpdated};
use crate::schedule::{self, ScheduleBatch};
use crate::storage::{
    self, require_admin, EmissionKind, GlobalRewardState, MarketRewardReport,
    RewardSpeedSchedule, TransferConvention,
};

#[contract]
pub struct LiquidityMining;

#[contractimpl]
impl LiquidityMining {
    pub fn initialize(env: Env, admin: Address, controller: Address) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_controller(&env, &controller);
        storage::set_layout_version(&env, LAYOUT_VERSION);
        storage::bump_core_ttl(&env);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        require_admin(&env);
        storage::set_admin(&env, &new_admin);
        AdminUpdated { admin: new_admin }.publish(&env);
    }

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn set_controller(env: Env, controller: Address) {
        require_admin(&env);
        storage::set_controller(&env, &controller);
        ControllerUpdated { controller }.publish(&env);
    }

    pub fn get_controller(env: Env) -> Address {
        storage::get_controller(&env)
    }

    pub fn upgrade_wasm(env: Env, new_wasm_hash: BytesN<32>) {
        require_admin(&env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    pub fn layout_version(env: Env) -> u32 {
        storage::get_layout_version(&env)
    }

    // Reward assets

    pub fn add_reward_asset(env: Env, asset: Address, convention: TransferConvention) {
        require_admin(&env);
        if storage::is_reward_asset(&env, &asset) {
            panic_with_error!(&env, Error::DuplicateRewardAsset);
        }
        storage::push_reward_asset(&env, &asset, convention);
        RewardAssetAdded { asset, convention }.publish(&env);
    }

    pub fn get_reward_assets(env: Env) -> Vec<Address> {
        storage::get_reward_assets(&env)
    }

    pub fn is_reward_asset(env: Env, asset: Address) -> bool {
        storage::is_reward_asset(&env, &asset)
    }

    pub fn get_reward_convention(env: Env, asset: Address) -> Option<TransferConvention> {
        storage::get_reward_convention(&env, &asset)
    }

    // Schedules

    pub fn set_supply_schedules(
        env: Env,
        asset: Address,
        markets: Vec<Address>,
        speeds: Vec<u128>,
        starts: Vec<u64>,
        ends: Vec<u64>,
    ) {
        require_admin(&env);
        let batch = ScheduleBatch {
            markets,
            speeds,
            starts,
            ends,
        };
        schedule::set_schedules(&env, &asset, EmissionKind::Supply, &batch);
    }

    pub fn set_borrow_schedules(
        env: Env,
        asset: Address,
        markets: Vec<Address>,
        speeds: Vec<u128>,
        starts: Vec<u64>,
        ends: Vec<u64>,
    ) {
        require_admin(&env);
        let batch = ScheduleBatch {
            markets,
            speeds,
            starts,
            ends,
        };
        schedule::set_schedules(&env, &asset, EmissionKind::Borrow, &batch);
    }

    pub fn get_supply_schedule(
        env: Env,
        asset: Address,
        market: Address,
    ) -> Option<RewardSpeedSchedule> {
        storage::get_schedule(&env, &asset, &market, EmissionKind::Supply)
    }

    pub fn get_borrow_schedule(
        env: Env,
        asset: Address,
        market: Address,
    ) -> Option<RewardSpeedSchedule> {
        storage::get_schedule(&env, &asset, &market, EmissionKind::Borrow)
    }

    // Index views

    pub fn get_supply_state(env: Env, asset: Address, market: Address) -> GlobalRewardState {
        storage::global_state_or_initial(&env, &asset, &market, EmissionKind::Supply)
    }

    pub fn get_borrow_state(env: Env, asset: Address, market: Address) -> GlobalRewardState {
        storage::global_state_or_initial(&env, &asset, &market, EmissionKind::Borrow)
    }

    pub fn get_account_index(
        env: Env,
        asset: Address,
        market: Address,
        kind: EmissionKind,
        account: Address,
    ) -> Option<U256> {
        storage::get_account_index(&env, &asset, &market, kind, &account)
    }

    pub fn get_accrued(env: Env, asset: Address, account: Address) -> u128 {
        storage::get_accrued(&env, &asset, &account)
    }

    /// Accrues the global index of one key up to now and returns it.
    pub fn accrue(env: Env, asset: Address, market: Address, kind: EmissionKind) -> GlobalRewardState {
        storage::ensure_reward_asset(&env, &asset);
        accrual::accrue_global_index(&env, &asset, &market, kind)
    }

    // Accounts

    pub fn set_rewards_receiver(env: Env, account: Address, receiver: Address) {
        require_admin(&env);
        storage::set_rewards_receiver(&env, &account, &receiver);
        RewardsReceiverUpdated { account, receiver }.publish(&env);
    }

    pub fn get_rewards_receiver(env: Env, account: Address) -> Option<Address> {
        storage::get_rewards_receiver(&env, &account)
    }

    /// Permissionless: flags come from the risk controller, not the caller.
    pub fn update_debtors(env: Env, accounts: Vec<Address>) {
        debtors::update_debtors(&env, &accounts);
    }

    pub fn is_debtor(env: Env, account: Address) -> bool {
        storage::is_debtor(&env, &account)
    }

    // Market hooks, called by the controller before balances change

    pub fn notify_supply_changed(env: Env, market: Address, accounts: Vec<Address>) {
        Self::notify(&env, &market, EmissionKind::Supply, &accounts);
    }

    pub fn notify_borrow_changed(env: Env, market: Address, accounts: Vec<Address>) {
        Self::notify(&env, &market, EmissionKind::Borrow, &accounts);
    }

    // Claims

    pub fn claim_all(env: Env, account: Address) {
        claims::claim_all(&env, &account);
    }

    pub fn claim(
        env: Env,
        accounts: Vec<Address>,
        markets: Vec<Address>,
        assets: Vec<Address>,
        supply: bool,
        borrow: bool,
    ) {
        claims::claim(&env, &accounts, &markets, &assets, supply, borrow);
    }

    pub fn claim_single(env: Env, account: Address, asset: Address) -> Vec<MarketRewardReport> {
        claims::claim_single(&env, &account, &asset)
    }
}

impl LiquidityMining {
    fn notify(env: &Env, market: &Address, kind: EmissionKind, accounts: &Vec<Address>) {
        storage::get_controller(env).require_auth();
        for asset in storage::get_reward_assets(env).iter() {
            distribution::settle_accounts(env, &asset, market, kind, accounts);
        }
    }
}
