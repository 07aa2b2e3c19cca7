#![no_std]
//! Guardians
//!
//! Eight-member committee able to approve protocol upgrades and to extend
//! their legal veto period. Every action is authorized by a threshold
//! signature bundle over a digest bound to this contract and network, with a
//! signed expiration. The committee can also act as a single signer through
//! `is_valid_signature`.

mod config;
mod types;

use governance_core::{
    hash_typed_data, interfaces::UpgradeHandlerClient, Committee, CommitteeError, Signer,
};
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Bytes, BytesN, Env, Symbol, Vec};

pub use crate::config::{DEFAULT_EIP1271_THRESHOLD, GUARDIANS_SIZE, GUARDIANS_THRESHOLD};
pub use crate::types::GuardiansAction;

const DOMAIN_NAME: Symbol = symbol_short!("Guardians");

#[contract]
pub struct GuardiansContract;

pub trait GuardiansTrait {
    /// Set the upgrade handler and the eight sorted members. Can only be called once.
    fn init(env: Env, handler: Address, members: Vec<Signer>) -> Result<(), CommitteeError>;
    /// Approve upgrade `id` on the handler.
    fn approve_upgrade_guardians(env: Env, id: BytesN<32>, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    /// Extend the legal veto period of upgrade `id` on the handler.
    fn extend_legal_veto(env: Env, id: BytesN<32>, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    fn check_signatures(env: Env, digest: BytesN<32>, signers: Vec<Signer>, signatures: Vec<Bytes>, threshold: u32) -> Result<(), CommitteeError>;
    fn is_valid_signature(env: Env, digest: BytesN<32>, signature: Bytes) -> Result<BytesN<4>, CommitteeError>;
    /// Digest the members have to sign for `action`.
    fn action_digest(env: Env, action: GuardiansAction) -> BytesN<32>;
    /// Handler only.
    fn update_members(env: Env, members: Vec<Signer>) -> Result<(), CommitteeError>;
    /// Handler only.
    fn set_eip1271_threshold(env: Env, threshold: u32) -> Result<(), CommitteeError>;
    fn members(env: Env) -> Result<Vec<Signer>, CommitteeError>;
    fn eip1271_threshold(env: Env) -> Result<u32, CommitteeError>;
    fn handler(env: Env) -> Result<Address, CommitteeError>;
}

#[contractimpl]
impl GuardiansTrait for GuardiansContract {
    fn init(env: Env, handler: Address, members: Vec<Signer>) -> Result<(), CommitteeError> {
        committee(&env).init(&handler, &members, DEFAULT_EIP1271_THRESHOLD)
    }

    fn approve_upgrade_guardians(env: Env, id: BytesN<32>, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        let committee = committee(&env);
        let digest = hash_typed_data(&env, &DOMAIN_NAME, GuardiansAction::ApproveUpgrade(id.clone(), valid_until));
        committee.check_action(&digest, valid_until, &signers, &signatures, GUARDIANS_THRESHOLD)?;
        log!(&env, "guardians approve upgrade", id);
        UpgradeHandlerClient::new(&env, &committee.handler()?).approve_upgrade_guardians(&id);
        Ok(())
    }

    fn extend_legal_veto(env: Env, id: BytesN<32>, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        let committee = committee(&env);
        let digest = hash_typed_data(&env, &DOMAIN_NAME, GuardiansAction::ExtendLegalVeto(id.clone(), valid_until));
        committee.check_action(&digest, valid_until, &signers, &signatures, GUARDIANS_THRESHOLD)?;
        log!(&env, "guardians extend legal veto", id);
        UpgradeHandlerClient::new(&env, &committee.handler()?).extend_legal_veto(&id);
        Ok(())
    }

    fn check_signatures(env: Env, digest: BytesN<32>, signers: Vec<Signer>, signatures: Vec<Bytes>, threshold: u32) -> Result<(), CommitteeError> {
        committee(&env).check_signatures(&digest, &signers, &signatures, threshold)
    }

    fn is_valid_signature(env: Env, digest: BytesN<32>, signature: Bytes) -> Result<BytesN<4>, CommitteeError> {
        committee(&env).is_valid_signature(&digest, &signature)
    }

    fn action_digest(env: Env, action: GuardiansAction) -> BytesN<32> { hash_typed_data(&env, &DOMAIN_NAME, action) }

    fn update_members(env: Env, members: Vec<Signer>) -> Result<(), CommitteeError> { committee(&env).update_members(&members) }
    fn set_eip1271_threshold(env: Env, threshold: u32) -> Result<(), CommitteeError> { committee(&env).set_eip1271_threshold(threshold) }
    fn members(env: Env) -> Result<Vec<Signer>, CommitteeError> { committee(&env).members() }
    fn eip1271_threshold(env: Env) -> Result<u32, CommitteeError> { committee(&env).eip1271_threshold() }
    fn handler(env: Env) -> Result<Address, CommitteeError> { committee(&env).handler() }
}

fn committee(env: &Env) -> Committee<'_> { Committee::new(env, GUARDIANS_SIZE) }
