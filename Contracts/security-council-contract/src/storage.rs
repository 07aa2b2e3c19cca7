use governance_core::CommitteeError;
use soroban_sdk::{contracttype, Env};

use crate::types::CouncilNonces;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    SoftFreezeThreshold,
    Nonces,
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn init(&self, soft_freeze_threshold: u32) {
        self.env.storage().instance().set(&DataKey::SoftFreezeThreshold, &soft_freeze_threshold);
        self.env.storage().instance().set(&DataKey::Nonces, &CouncilNonces::default());
    }

    pub fn soft_freeze_threshold(&self) -> Result<u32, CommitteeError> {
        self.env.storage().instance().get(&DataKey::SoftFreezeThreshold).ok_or(CommitteeError::NotInitialized)
    }

    pub fn set_soft_freeze_threshold(&self, threshold: u32) {
        self.env.storage().instance().set(&DataKey::SoftFreezeThreshold, &threshold);
    }

    pub fn nonces(&self) -> Result<CouncilNonces, CommitteeError> {
        self.env.storage().instance().get(&DataKey::Nonces).ok_or(CommitteeError::NotInitialized)
    }

    pub fn save_nonces(&self, nonces: &CouncilNonces) {
        self.env.storage().instance().set(&DataKey::Nonces, nonces);
    }
}
