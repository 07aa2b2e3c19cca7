//! Client interfaces for contracts the governance contracts call into.

use soroban_sdk::{contractclient, contracttype, Bytes, BytesN, Env, Vec};

use crate::proposal::UpgradeProposal;

/// Message the origin governor emits to start an upgrade.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrossChainMessage {
    pub sender: BytesN<32>,
    /// Upgrade id being proposed.
    pub data: BytesN<32>,
}

#[contractclient(name = "SignatureValidatorClient")]
pub trait SignatureValidatorInterface {
    fn is_valid_signature(env: Env, digest: BytesN<32>, signature: Bytes) -> BytesN<4>;
}

/// Entry points of the upgrade handler used by the committees.
#[contractclient(name = "UpgradeHandlerClient")]
pub trait UpgradeHandlerInterface {
    fn approve_upgrade_guardians(env: Env, id: BytesN<32>);
    fn extend_legal_veto(env: Env, id: BytesN<32>);
    fn approve_upgrade_security_council(env: Env, id: BytesN<32>);
    fn soft_freeze(env: Env);
    fn hard_freeze(env: Env);
    fn unfreeze(env: Env);
    fn execute_emergency_upgrade(env: Env, proposal: UpgradeProposal);
}

/// Proves that a message was emitted on the origin chain.
#[contractclient(name = "InclusionVerifierClient")]
pub trait InclusionVerifierInterface {
    fn verify_inclusion(
        env: Env,
        batch_number: u64,
        message_index: u64,
        tx_number_in_batch: u32,
        proof: Vec<BytesN<32>>,
        message: CrossChainMessage,
    ) -> bool;
}

/// Chain lifecycle manager honoring freeze directives.
#[contractclient(name = "ChainManagerClient")]
pub trait ChainManagerInterface {
    fn chain_ids(env: Env) -> Vec<u64>;
    fn freeze_chain(env: Env, chain_id: u64);
    fn unfreeze_chain(env: Env, chain_id: u64);
}
