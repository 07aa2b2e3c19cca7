#![no_std]
//! Security Council
//!
//! Twelve-member committee with the expedited upgrade approval and the
//! emergency freeze powers. Every action is authorized by a threshold
//! signature bundle with a signed expiration; irreversible actions need more
//! signatures than the soft freeze, whose threshold the council tunes itself.

mod config;
mod storage;
mod types;

use governance_core::{
    hash_typed_data, interfaces::UpgradeHandlerClient, Committee, CommitteeError, Signer,
};
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Bytes, BytesN, Env, Symbol, Vec};

use crate::storage::Storage;

pub use crate::config::{
    APPROVE_UPGRADE_SECURITY_COUNCIL_THRESHOLD, DEFAULT_EIP1271_THRESHOLD, HARD_FREEZE_THRESHOLD,
    RECOMMENDED_SOFT_FREEZE_THRESHOLD, SECURITY_COUNCIL_SIZE, SOFT_FREEZE_CONSERVATIVE_THRESHOLD,
    UNFREEZE_THRESHOLD,
};
pub use crate::types::{CouncilAction, CouncilNonces, SoftFreezeThresholdSetEvent};

const DOMAIN_NAME: Symbol = symbol_short!("Council");

#[contract]
pub struct SecurityCouncilContract;

pub trait SecurityCouncilTrait {
    /// Set the upgrade handler and the twelve sorted members. Can only be called once.
    fn init(env: Env, handler: Address, members: Vec<Signer>) -> Result<(), CommitteeError>;
    /// Approve upgrade `id` on the handler, skipping the Guardians-only delay.
    fn approve_upgrade_security_council(env: Env, id: BytesN<32>, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    fn soft_freeze(env: Env, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    fn hard_freeze(env: Env, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    fn unfreeze(env: Env, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    /// Threshold must stay within the recommended and conservative bounds.
    fn set_soft_freeze_threshold(env: Env, threshold: u32, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError>;
    fn check_signatures(env: Env, digest: BytesN<32>, signers: Vec<Signer>, signatures: Vec<Bytes>, threshold: u32) -> Result<(), CommitteeError>;
    fn is_valid_signature(env: Env, digest: BytesN<32>, signature: Bytes) -> Result<BytesN<4>, CommitteeError>;
    /// Digest the members have to sign for `action`.
    fn action_digest(env: Env, action: CouncilAction) -> BytesN<32>;
    /// Handler only.
    fn update_members(env: Env, members: Vec<Signer>) -> Result<(), CommitteeError>;
    /// Handler only.
    fn set_eip1271_threshold(env: Env, threshold: u32) -> Result<(), CommitteeError>;
    fn members(env: Env) -> Result<Vec<Signer>, CommitteeError>;
    fn eip1271_threshold(env: Env) -> Result<u32, CommitteeError>;
    fn soft_freeze_threshold(env: Env) -> Result<u32, CommitteeError>;
    fn nonces(env: Env) -> Result<CouncilNonces, CommitteeError>;
    fn handler(env: Env) -> Result<Address, CommitteeError>;
}

#[contractimpl]
impl SecurityCouncilTrait for SecurityCouncilContract {
    fn init(env: Env, handler: Address, members: Vec<Signer>) -> Result<(), CommitteeError> {
        committee(&env).init(&handler, &members, DEFAULT_EIP1271_THRESHOLD)?;
        Storage::new(&env).init(RECOMMENDED_SOFT_FREEZE_THRESHOLD);
        Ok(())
    }

    fn approve_upgrade_security_council(env: Env, id: BytesN<32>, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        let committee = committee(&env);
        let digest = hash_typed_data(&env, &DOMAIN_NAME, CouncilAction::ApproveUpgrade(id.clone(), valid_until));
        committee.check_action(&digest, valid_until, &signers, &signatures, APPROVE_UPGRADE_SECURITY_COUNCIL_THRESHOLD)?;
        log!(&env, "security council approve upgrade", id);
        handler_client(&env, &committee)?.approve_upgrade_security_council(&id);
        Ok(())
    }

    fn soft_freeze(env: Env, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        let store = Storage::new(&env);
        let committee = committee(&env);
        let mut nonces = store.nonces()?;
        let digest = hash_typed_data(&env, &DOMAIN_NAME, CouncilAction::SoftFreeze(nonces.soft_freeze, valid_until));
        committee.check_action(&digest, valid_until, &signers, &signatures, store.soft_freeze_threshold()?)?;
        nonces.soft_freeze += 1;
        store.save_nonces(&nonces);
        handler_client(&env, &committee)?.soft_freeze();
        Ok(())
    }

    fn hard_freeze(env: Env, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        let store = Storage::new(&env);
        let committee = committee(&env);
        let mut nonces = store.nonces()?;
        let digest = hash_typed_data(&env, &DOMAIN_NAME, CouncilAction::HardFreeze(nonces.hard_freeze, valid_until));
        committee.check_action(&digest, valid_until, &signers, &signatures, HARD_FREEZE_THRESHOLD)?;
        nonces.hard_freeze += 1;
        store.save_nonces(&nonces);
        handler_client(&env, &committee)?.hard_freeze();
        Ok(())
    }

    fn unfreeze(env: Env, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        let store = Storage::new(&env);
        let committee = committee(&env);
        let mut nonces = store.nonces()?;
        let digest = hash_typed_data(&env, &DOMAIN_NAME, CouncilAction::Unfreeze(nonces.unfreeze, valid_until));
        committee.check_action(&digest, valid_until, &signers, &signatures, UNFREEZE_THRESHOLD)?;
        nonces.unfreeze += 1;
        store.save_nonces(&nonces);
        handler_client(&env, &committee)?.unfreeze();
        Ok(())
    }

    fn set_soft_freeze_threshold(env: Env, threshold: u32, valid_until: u64, signers: Vec<Signer>, signatures: Vec<Bytes>) -> Result<(), CommitteeError> {
        if !(RECOMMENDED_SOFT_FREEZE_THRESHOLD..=SOFT_FREEZE_CONSERVATIVE_THRESHOLD).contains(&threshold) {
            return Err(CommitteeError::InvalidThreshold);
        }
        let store = Storage::new(&env);
        let committee = committee(&env);
        let mut nonces = store.nonces()?;
        let digest = hash_typed_data(
            &env,
            &DOMAIN_NAME,
            CouncilAction::SetSoftFreezeThreshold(threshold, nonces.set_soft_freeze_threshold, valid_until),
        );
        committee.check_action(&digest, valid_until, &signers, &signatures, SOFT_FREEZE_CONSERVATIVE_THRESHOLD)?;
        nonces.set_soft_freeze_threshold += 1;
        store.save_nonces(&nonces);
        store.set_soft_freeze_threshold(threshold);
        env.events().publish((symbol_short!("sf_thr"),), SoftFreezeThresholdSetEvent { threshold });
        Ok(())
    }

    fn check_signatures(env: Env, digest: BytesN<32>, signers: Vec<Signer>, signatures: Vec<Bytes>, threshold: u32) -> Result<(), CommitteeError> {
        committee(&env).check_signatures(&digest, &signers, &signatures, threshold)
    }

    fn is_valid_signature(env: Env, digest: BytesN<32>, signature: Bytes) -> Result<BytesN<4>, CommitteeError> {
        committee(&env).is_valid_signature(&digest, &signature)
    }

    fn action_digest(env: Env, action: CouncilAction) -> BytesN<32> { hash_typed_data(&env, &DOMAIN_NAME, action) }

    fn update_members(env: Env, members: Vec<Signer>) -> Result<(), CommitteeError> { committee(&env).update_members(&members) }
    fn set_eip1271_threshold(env: Env, threshold: u32) -> Result<(), CommitteeError> { committee(&env).set_eip1271_threshold(threshold) }
    fn members(env: Env) -> Result<Vec<Signer>, CommitteeError> { committee(&env).members() }
    fn eip1271_threshold(env: Env) -> Result<u32, CommitteeError> { committee(&env).eip1271_threshold() }
    fn soft_freeze_threshold(env: Env) -> Result<u32, CommitteeError> { Storage::new(&env).soft_freeze_threshold() }
    fn nonces(env: Env) -> Result<CouncilNonces, CommitteeError> { Storage::new(&env).nonces() }
    fn handler(env: Env) -> Result<Address, CommitteeError> { committee(&env).handler() }
}

fn committee(env: &Env) -> Committee<'_> { Committee::new(env, SECURITY_COUNCIL_SIZE) }

fn handler_client<'a>(env: &'a Env, committee: &Committee) -> Result<UpgradeHandlerClient<'a>, CommitteeError> {
    Ok(UpgradeHandlerClient::new(env, &committee.handler()?))
}
