use governance_core::{CommitteeError, Signer, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardConfig {
    pub handler: Address,
    pub guardians: Address,
    pub security_council: Address,
    pub foundation: Signer,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn init(&self, config: &BoardConfig) -> Result<(), CommitteeError> {
        let instance = self.env.storage().instance();
        if instance.has(&DataKey::Config) { return Err(CommitteeError::AlreadyInitialized); }
        instance.set(&DataKey::Config, config);
        instance.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        Ok(())
    }

    pub fn config(&self) -> Result<BoardConfig, CommitteeError> {
        self.env.storage().instance().get(&DataKey::Config).ok_or(CommitteeError::NotInitialized)
    }
}
