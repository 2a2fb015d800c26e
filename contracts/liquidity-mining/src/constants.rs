pub const PRECISION: u128 = 1_000_000_000_000_000_000u128; // 1e18
pub const INITIAL_INDEX: u128 = PRECISION;
pub const LAYOUT_VERSION: u32 = 1;
