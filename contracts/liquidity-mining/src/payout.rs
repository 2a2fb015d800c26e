use soroban_sdk::{panic_with_error, token, Address, Env, Symbol, TryFromVal, Val};

use crate::errors::Error;
use crate::events::{RewardPaid, RewardTransferSkipped};
use crate::helpers::{to_i128, try_call_contract};
use crate::storage::{self, TransferConvention};

/// Moves a reward asset out of the treasury without ever aborting the caller.
pub trait TransferAdapter {
    /// Balance of `holder`, or `None` when the asset cannot report it.
    fn balance_of(&self, env: &Env, asset: &Address, holder: &Address) -> Option<i128>;
    /// Transfers from the contract to `to`; `true` only on confirmed success.
    fn attempt_transfer(&self, env: &Env, asset: &Address, to: &Address, amount: i128) -> bool;
}

struct StellarAssetAdapter;
// SEP-41 and legacy tokens, reached through a plain contract call
struct InvokedTokenAdapter;

// Tries `balance`, then `balance_of` for tokens predating SEP-41 naming
fn read_balance(env: &Env, asset: &Address, holder: &Address) -> Option<i128> {
    try_call_contract::<i128, _>(env, asset, "balance", (holder.clone(),))
        .or_else(|_| try_call_contract::<i128, _>(env, asset, "balance_of", (holder.clone(),)))
        .ok()
}

// Reads `transfer`'s return value as a raw `Val`: void and `true` both mean
// the tokens moved. Only `false` or a revert count as failure.
fn transfer_confirmed(env: &Env, asset: &Address, to: &Address, amount: i128) -> bool {
    let from = env.current_contract_address();
    match try_call_contract::<Val, _>(env, asset, "transfer", (from, to.clone(), amount)) {
        Ok(value) => {
            <()>::try_from_val(env, &value).is_ok()
                || matches!(bool::try_from_val(env, &value), Ok(true))
        }
        Err(_) => false,
    }
}

impl TransferAdapter for StellarAssetAdapter {
    fn balance_of(&self, env: &Env, asset: &Address, holder: &Address) -> Option<i128> {
        match token::Client::new(env, asset).try_balance(holder) {
            Ok(Ok(balance)) => Some(balance),
            _ => None,
        }
    }

    fn attempt_transfer(&self, env: &Env, asset: &Address, to: &Address, amount: i128) -> bool {
        let from = env.current_contract_address();
        matches!(
            token::Client::new(env, asset).try_transfer(&from, to, &amount),
            Ok(Ok(()))
        )
    }
}

impl TransferAdapter for InvokedTokenAdapter {
    fn balance_of(&self, env: &Env, asset: &Address, holder: &Address) -> Option<i128> {
        read_balance(env, asset, holder)
    }

    fn attempt_transfer(&self, env: &Env, asset: &Address, to: &Address, amount: i128) -> bool {
        transfer_confirmed(env, asset, to, amount)
    }
}

pub fn adapter_for(convention: TransferConvention) -> &'static dyn TransferAdapter {
    match convention {
        TransferConvention::Native => &StellarAssetAdapter,
        TransferConvention::Standard | TransferConvention::BoolReturning => &InvokedTokenAdapter,
    }
}

fn skip(env: &Env, asset: &Address, account: &Address, amount: u128, reason: &str) -> u128 {
    RewardTransferSkipped {
        asset: asset.clone(),
        account: account.clone(),
        amount,
        reason: Symbol::new(env, reason),
    }
    .publish(env);
    amount
}

/// Pays `amount` of `asset` to `account` (or its receiver) and returns what is
/// left unpaid: zero on success, the full amount otherwise.
pub fn pay(env: &Env, asset: &Address, account: &Address, amount: u128) -> u128 {
    if amount == 0 {
        return 0;
    }
    if storage::is_debtor(env, account) {
        return skip(env, asset, account, amount, "debtor");
    }
    let convention = storage::get_reward_convention(env, asset)
        .unwrap_or_else(|| panic_with_error!(env, Error::UnknownRewardAsset));
    let adapter = adapter_for(convention);

    let Some(value) = to_i128(amount) else {
        return skip(env, asset, account, amount, "insufficient_treasury");
    };
    let treasury = env.current_contract_address();
    match adapter.balance_of(env, asset, &treasury) {
        Some(balance) if balance >= value => {}
        Some(_) => return skip(env, asset, account, amount, "insufficient_treasury"),
        None => return skip(env, asset, account, amount, "balance_unavailable"),
    }

    let recipient = storage::get_rewards_receiver(env, account).unwrap_or_else(|| account.clone());
    if !adapter.attempt_transfer(env, asset, &recipient, value) {
        return skip(env, asset, account, amount, "transfer_failed");
    }

    RewardPaid {
        asset: asset.clone(),
        account: account.clone(),
        recipient,
        amount,
    }
    .publish(env);
    0
}

/// Pays out the whole accrued balance; whatever could not be paid stays accrued.
pub fn pay_accrued(env: &Env, asset: &Address, account: &Address) {
    let accrued = storage::get_accrued(env, asset, account);
    let unpaid = pay(env, asset, account, accrued);
    if unpaid != accrued {
        storage::set_accrued(env, asset, account, unpaid);
    }
}
