#![no_std]
//! Emergency Upgrade Board
//!
//! Lets the Guardians, the Security Council and the foundation jointly push
//! an upgrade through the handler without any waiting period. All three have
//! to sign the same board-scoped digest of the upgrade id.

mod storage;

use governance_core::{
    hash_typed_data, interfaces::UpgradeHandlerClient, upgrade_id, verify_signature, Call, CommitteeError,
    Signer, UpgradeProposal,
};
use soroban_sdk::{contract, contractimpl, contracttype, log, symbol_short, Address, Bytes, BytesN, Env, Symbol, Vec};

use crate::storage::Storage;
pub use crate::storage::BoardConfig;

const DOMAIN_NAME: Symbol = symbol_short!("EmrgBoard");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoardAction {
    ExecuteEmergencyUpgrade(BytesN<32>),
}

#[contract]
pub struct EmergencyUpgradeBoard;

pub trait EmergencyUpgradeBoardTrait {
    fn init(env: Env, handler: Address, guardians: Address, security_council: Address, foundation: Signer) -> Result<(), CommitteeError>;
    /// Execute `calls` right away. The committee signatures are the blobs
    /// their `is_valid_signature` accepts.
    fn execute_emergency_upgrade(
        env: Env,
        calls: Vec<Call>,
        salt: BytesN<32>,
        guardians_signature: Bytes,
        security_council_signature: Bytes,
        foundation_signature: Bytes,
    ) -> Result<BytesN<32>, CommitteeError>;
    /// Digest the three principals sign for an upgrade id.
    fn action_digest(env: Env, id: BytesN<32>) -> BytesN<32>;
    fn config(env: Env) -> Result<BoardConfig, CommitteeError>;
}

#[contractimpl]
impl EmergencyUpgradeBoardTrait for EmergencyUpgradeBoard {
    fn init(env: Env, handler: Address, guardians: Address, security_council: Address, foundation: Signer) -> Result<(), CommitteeError> {
        Storage::new(&env).init(&BoardConfig { handler, guardians, security_council, foundation })
    }

    fn execute_emergency_upgrade(
        env: Env,
        calls: Vec<Call>,
        salt: BytesN<32>,
        guardians_signature: Bytes,
        security_council_signature: Bytes,
        foundation_signature: Bytes,
    ) -> Result<BytesN<32>, CommitteeError> {
        let config = Storage::new(&env).config()?;
        let proposal = UpgradeProposal { calls, executor: Some(env.current_contract_address()), salt };
        let id = upgrade_id(&env, &proposal);
        let digest = hash_typed_data(&env, &DOMAIN_NAME, BoardAction::ExecuteEmergencyUpgrade(id.clone()));

        verify_signature(&env, &Signer::Contract(config.guardians), &digest, &guardians_signature)?;
        verify_signature(&env, &Signer::Contract(config.security_council), &digest, &security_council_signature)?;
        verify_signature(&env, &config.foundation, &digest, &foundation_signature)?;

        log!(&env, "emergency upgrade approved", id);
        UpgradeHandlerClient::new(&env, &config.handler).execute_emergency_upgrade(&proposal);
        Ok(id)
    }

    fn action_digest(env: Env, id: BytesN<32>) -> BytesN<32> {
        hash_typed_data(&env, &DOMAIN_NAME, BoardAction::ExecuteEmergencyUpgrade(id))
    }

    fn config(env: Env) -> Result<BoardConfig, CommitteeError> { Storage::new(&env).config() }
}

#[cfg(test)]
mod test;
