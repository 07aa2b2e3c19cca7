pub const GUARDIANS_SIZE: u32 = 8;

/// Signatures required for every Guardians action.
pub const GUARDIANS_THRESHOLD: u32 = 5;

/// Initial threshold for `is_valid_signature`.
pub const DEFAULT_EIP1271_THRESHOLD: u32 = 5;
