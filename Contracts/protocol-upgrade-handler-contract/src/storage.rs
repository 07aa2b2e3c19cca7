use governance_core::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, BytesN, Env};

use crate::{
    config::{UPGRADE_BUMP_AMOUNT, UPGRADE_LIFETIME_THRESHOLD},
    error::HandlerError,
    types::{FreezeStatus, HandlerConfig, UpgradeStatus, UpgradeTimings},
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Timings,
    FreezeStatus,
    ProtocolFrozenUntil,
    Upgrade(BytesN<32>),
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn is_initialized(&self) -> bool { self.env.storage().instance().has(&DataKey::Config) }

    pub fn init(&self, config: &HandlerConfig, timings: &UpgradeTimings) {
        let instance = self.env.storage().instance();
        instance.set(&DataKey::Config, config);
        instance.set(&DataKey::Timings, timings);
        instance.set(&DataKey::FreezeStatus, &FreezeStatus::None);
        instance.set(&DataKey::ProtocolFrozenUntil, &0u64);
        self.bump_instance();
    }

    pub fn config(&self) -> Result<HandlerConfig, HandlerError> {
        self.env.storage().instance().get(&DataKey::Config).ok_or(HandlerError::NotInitialized)
    }

    pub fn save_config(&self, config: &HandlerConfig) {
        self.env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn timings(&self) -> Result<UpgradeTimings, HandlerError> {
        self.env.storage().instance().get(&DataKey::Timings).ok_or(HandlerError::NotInitialized)
    }

    pub fn freeze_status(&self) -> FreezeStatus {
        self.env.storage().instance().get(&DataKey::FreezeStatus).unwrap_or(FreezeStatus::None)
    }

    pub fn protocol_frozen_until(&self) -> u64 {
        self.env.storage().instance().get(&DataKey::ProtocolFrozenUntil).unwrap_or(0)
    }

    pub fn set_freeze(&self, status: FreezeStatus, frozen_until: u64) {
        let instance = self.env.storage().instance();
        instance.set(&DataKey::FreezeStatus, &status);
        instance.set(&DataKey::ProtocolFrozenUntil, &frozen_until);
    }

    pub fn has_upgrade(&self, id: &BytesN<32>) -> bool {
        self.env.storage().persistent().has(&DataKey::Upgrade(id.clone()))
    }

    pub fn upgrade(&self, id: &BytesN<32>) -> Option<UpgradeStatus> {
        let key = DataKey::Upgrade(id.clone());
        let status = self.env.storage().persistent().get(&key);
        if status.is_some() {
            self.env.storage().persistent().extend_ttl(&key, UPGRADE_LIFETIME_THRESHOLD, UPGRADE_BUMP_AMOUNT);
        }
        status
    }

    pub fn save_upgrade(&self, id: &BytesN<32>, status: &UpgradeStatus) {
        let key = DataKey::Upgrade(id.clone());
        self.env.storage().persistent().set(&key, status);
        self.env.storage().persistent().extend_ttl(&key, UPGRADE_LIFETIME_THRESHOLD, UPGRADE_BUMP_AMOUNT);
    }

    pub fn bump_instance(&self) {
        self.env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
