/// Ledgers closed in one day at a five second close time.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Returned by `is_valid_signature` when a signature bundle is accepted
/// (`bytes4(keccak256("isValidSignature(bytes32,bytes)"))`).
pub const VALID_SIGNATURE_MAGIC: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];
