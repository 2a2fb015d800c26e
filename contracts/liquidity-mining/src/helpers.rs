use soroban_sdk::{
    panic_with_error, Address, Env, IntoVal, InvokeError, Symbol, TryFromVal, Val, Vec, U256,
};

use crate::constants::PRECISION;
use crate::errors::Error;

/// `a * b / denominator`, rounded down. A zero denominator yields zero.
///
/// The product is taken in u128 when it fits and widened to U256 otherwise;
/// only a quotient that does not fit back into u128 aborts.
pub fn mul_div_floor(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 || a == 0 || b == 0 {
        return 0;
    }
    if let Some(product) = a.checked_mul(b) {
        return product / denominator;
    }
    let wide = U256::from_u128(env, a)
        .mul(&U256::from_u128(env, b))
        .div(&U256::from_u128(env, denominator));
    wide.to_u128()
        .unwrap_or_else(|| panic_with_error!(env, Error::MathOverflow))
}

/// Converts a raw borrow amount into index-free units.
pub fn normalize_by_index(env: &Env, amount: u128, borrow_index: u128) -> u128 {
    mul_div_floor(env, amount, PRECISION, borrow_index)
}

pub fn checked_add(env: &Env, a: u128, b: u128) -> u128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(env, Error::MathOverflow))
}

pub fn wide(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

/// Index growth for `speed` emitted over `elapsed` seconds across `total`
/// units: `speed * elapsed * PRECISION / total`, floored. Zero when nothing
/// participates.
///
/// Kept in U256: with a dust-sized `total` the ratio outgrows u128 long before
/// any real amount owed to an account does.
pub fn index_ratio(env: &Env, speed: u128, elapsed: u64, total: u128) -> U256 {
    if total == 0 {
        return wide(env, 0);
    }
    wide(env, speed)
        .mul(&wide(env, elapsed as u128))
        .mul(&wide(env, PRECISION))
        .div(&wide(env, total))
}

/// An account's credit for `index_delta` of growth: `index_delta * participation
/// / PRECISION`, floored.
pub fn index_share(env: &Env, index_delta: &U256, participation: u128) -> u128 {
    if participation == 0 {
        return 0;
    }
    index_delta
        .mul(&wide(env, participation))
        .div(&wide(env, PRECISION))
        .to_u128()
        .unwrap_or_else(|| panic_with_error!(env, Error::MathOverflow))
}

pub fn to_i128(amount: u128) -> Option<i128> {
    if amount > i128::MAX as u128 {
        None
    } else {
        Some(amount as i128)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallErrorKind {
    ContractRevert,
    HostError,
}

/// Invokes `func` on `contract` without letting a failure abort the caller.
pub fn try_call_contract<T, A>(
    env: &Env,
    contract: &Address,
    func: &str,
    args: A,
) -> Result<T, CallErrorKind>
where
    T: TryFromVal<Env, Val>,
    A: IntoVal<Env, Vec<Val>>,
{
    let symbol = Symbol::new(env, func);
    let args: Vec<Val> = args.into_val(env);
    match env.try_invoke_contract::<T, InvokeError>(contract, &symbol, args) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(CallErrorKind::ContractRevert),
        Err(_) => Err(CallErrorKind::HostError),
    }
}
