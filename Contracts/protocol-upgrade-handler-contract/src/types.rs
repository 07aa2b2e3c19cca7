use soroban_sdk::{contracttype, Address, BytesN};

/// Per-upgrade record. Fields only ever move forward: timestamps are set
/// once and flags only flip from false to true.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradeStatus {
    pub creation_timestamp: u64,
    pub sc_approval_timestamp: Option<u64>,
    pub guardians_approval: bool,
    pub guardians_extended_legal_veto: bool,
    pub executed: bool,
}

/// Phase of an upgrade, always derived from its [`UpgradeStatus`] and the clock.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UpgradeState {
    None = 0,
    LegalVetoPeriod = 1,
    Waiting = 2,
    ExecutionPending = 3,
    Ready = 4,
    Expired = 5,
    Done = 6,
}

/// Position of the protocol within the current upgrade cycle's freeze budget.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FreezeStatus {
    None = 0,
    Soft = 1,
    Hard = 2,
    AfterSoftFreeze = 3,
    AfterHardFreeze = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HandlerConfig {
    /// Proves messages of the origin chain.
    pub verifier: Address,
    /// Governor on the origin chain allowed to propose upgrades.
    pub origin_governor: BytesN<32>,
    /// Chain lifecycle manager receiving freeze directives.
    pub chain_manager: Address,
    /// Asset forwarded as call value.
    pub native_token: Address,
    pub guardians: Address,
    pub security_council: Address,
    pub emergency_upgrade_board: Address,
}

/// Durations in seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradeTimings {
    pub legal_veto_period: u64,
    pub extended_legal_veto_period: u64,
    /// Time the committees have to approve once the legal veto ends.
    pub upgrade_wait_or_expire_period: u64,
    /// Delay between approval and execution.
    pub upgrade_delay_period: u64,
    pub soft_freeze_period: u64,
    pub hard_freeze_period: u64,
}
