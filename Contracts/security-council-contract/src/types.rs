use soroban_sdk::{contracttype, BytesN};

/// Actions the Security Council signs.
///
/// Repeatable actions carry the nonce current at signing time followed by the
/// signed expiration; a bundle is spent as soon as it is used once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CouncilAction {
    ApproveUpgrade(BytesN<32>, u64),
    SoftFreeze(u32, u64),
    HardFreeze(u32, u64),
    Unfreeze(u32, u64),
    /// New threshold, nonce, expiration.
    SetSoftFreezeThreshold(u32, u32, u64),
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CouncilNonces {
    pub soft_freeze: u32,
    pub hard_freeze: u32,
    pub unfreeze: u32,
    pub set_soft_freeze_threshold: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SoftFreezeThresholdSetEvent {
    pub threshold: u32,
}
