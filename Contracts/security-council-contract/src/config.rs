pub const SECURITY_COUNCIL_SIZE: u32 = 12;

pub const APPROVE_UPGRADE_SECURITY_COUNCIL_THRESHOLD: u32 = 6;
pub const HARD_FREEZE_THRESHOLD: u32 = 9;
pub const UNFREEZE_THRESHOLD: u32 = 9;

/// Lowest soft freeze threshold the council may configure, and the initial one.
pub const RECOMMENDED_SOFT_FREEZE_THRESHOLD: u32 = 3;
/// Highest soft freeze threshold, also required to change it.
pub const SOFT_FREEZE_CONSERVATIVE_THRESHOLD: u32 = 9;

/// Initial threshold for `is_valid_signature`.
pub const DEFAULT_EIP1271_THRESHOLD: u32 = 9;
