#![no_std]
//! Protocol Upgrade Handler
//!
//! Central state machine of protocol upgrades. An upgrade proposal proven to
//! come from the origin governor goes through a legal veto period, then waits
//! for the Guardians and/or the Security Council. Council approval makes the
//! upgrade executable one delay later; Guardians alone have to sit out the
//! whole waiting window first. Unapproved upgrades expire. The handler also
//! carries the Security Council's emergency freeze powers and the emergency
//! upgrade path.
//!
//! The phase of an upgrade is derived from its record and the ledger time on
//! every read (see [`state::upgrade_state`]).

#[cfg(test)]
extern crate std;

mod config;
mod error;
mod events;
mod execution;
mod freeze;
mod state;
mod storage;
mod types;

use governance_core::{
    interfaces::{CrossChainMessage, InclusionVerifierClient},
    upgrade_id, UpgradeProposal,
};
use soroban_sdk::{contract, contractimpl, log, BytesN, Env, Vec};

use crate::{events::Events, storage::Storage};

pub use crate::config::{
    EXTENDED_LEGAL_VETO_PERIOD, HARD_FREEZE_PERIOD, SOFT_FREEZE_PERIOD, STANDARD_LEGAL_VETO_PERIOD,
    UPGRADE_DELAY_PERIOD, UPGRADE_WAIT_OR_EXPIRE_PERIOD,
};
pub use crate::error::HandlerError;
pub use crate::types::{FreezeStatus, HandlerConfig, UpgradeState, UpgradeStatus, UpgradeTimings};

#[contract]
pub struct ProtocolUpgradeHandler;

/// Public interface of the handler.
pub trait UpgradeHandlerTrait {
    /// Store collaborators and timings. Can only be called once.
    fn init(env: Env, config: HandlerConfig, timings: UpgradeTimings) -> Result<(), HandlerError>;
    /// Admit an upgrade whose id the origin governor provably emitted. Returns the id.
    fn start_upgrade(
        env: Env,
        batch_number: u64,
        message_index: u64,
        tx_number_in_batch: u32,
        proof: Vec<BytesN<32>>,
        proposal: UpgradeProposal,
    ) -> Result<BytesN<32>, HandlerError>;
    /// Security Council only; upgrade must be waiting.
    fn approve_upgrade_security_council(env: Env, id: BytesN<32>) -> Result<(), HandlerError>;
    /// Guardians only; upgrade must be waiting and not yet approved by them.
    fn approve_upgrade_guardians(env: Env, id: BytesN<32>) -> Result<(), HandlerError>;
    /// Guardians only; once, during the standard legal veto period.
    fn extend_legal_veto(env: Env, id: BytesN<32>) -> Result<(), HandlerError>;
    /// Execute a ready upgrade. Only its executor may call when one is set.
    fn execute(env: Env, proposal: UpgradeProposal) -> Result<(), HandlerError>;
    /// Emergency upgrade board only; executes a never-started upgrade at once.
    fn execute_emergency_upgrade(env: Env, proposal: UpgradeProposal) -> Result<(), HandlerError>;
    /// Security Council only.
    fn soft_freeze(env: Env) -> Result<(), HandlerError>;
    /// Security Council only.
    fn hard_freeze(env: Env) -> Result<(), HandlerError>;
    /// Security Council only.
    fn unfreeze(env: Env) -> Result<(), HandlerError>;
    fn reinforce_freeze(env: Env) -> Result<(), HandlerError>;
    fn reinforce_freeze_one_chain(env: Env, chain_id: u64) -> Result<(), HandlerError>;
    fn reinforce_unfreeze(env: Env) -> Result<(), HandlerError>;
    fn reinforce_unfreeze_one_chain(env: Env, chain_id: u64) -> Result<(), HandlerError>;
    fn upgrade_state(env: Env, id: BytesN<32>) -> Result<UpgradeState, HandlerError>;
    fn upgrade_status(env: Env, id: BytesN<32>) -> Result<UpgradeStatus, HandlerError>;
    fn upgrade_id(env: Env, proposal: UpgradeProposal) -> BytesN<32>;
    fn config(env: Env) -> Result<HandlerConfig, HandlerError>;
    fn timings(env: Env) -> Result<UpgradeTimings, HandlerError>;
    fn freeze_status(env: Env) -> FreezeStatus;
    fn protocol_frozen_until(env: Env) -> u64;
}

#[contractimpl]
impl UpgradeHandlerTrait for ProtocolUpgradeHandler {
    fn init(env: Env, config: HandlerConfig, timings: UpgradeTimings) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        if store.is_initialized() { return Err(HandlerError::AlreadyInitialized); }
        timings.validate()?;
        store.init(&config, &timings);
        Ok(())
    }

    fn start_upgrade(
        env: Env,
        batch_number: u64,
        message_index: u64,
        tx_number_in_batch: u32,
        proof: Vec<BytesN<32>>,
        proposal: UpgradeProposal,
    ) -> Result<BytesN<32>, HandlerError> {
        let store = Storage::new(&env);
        let config = store.config()?;
        let id = upgrade_id(&env, &proposal);
        if store.has_upgrade(&id) { return Err(HandlerError::UpgradeAlreadyExists); }

        let message = CrossChainMessage { sender: config.origin_governor, data: id.clone() };
        let verifier = InclusionVerifierClient::new(&env, &config.verifier);
        if !verifier.verify_inclusion(&batch_number, &message_index, &tx_number_in_batch, &proof, &message) {
            return Err(HandlerError::InvalidInclusionProof);
        }

        let status = UpgradeStatus {
            creation_timestamp: env.ledger().timestamp(),
            sc_approval_timestamp: None,
            guardians_approval: false,
            guardians_extended_legal_veto: false,
            executed: false,
        };
        store.save_upgrade(&id, &status);
        store.bump_instance();
        log!(&env, "upgrade started", id);
        Events::emit_upgrade_started(&env, &id, &proposal);
        Ok(id)
    }

    fn approve_upgrade_security_council(env: Env, id: BytesN<32>) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.security_council.require_auth();
        let mut status = store.upgrade(&id).ok_or(HandlerError::UpgradeNotFound)?;
        if current_state(&env, &store, &status)? != UpgradeState::Waiting {
            return Err(HandlerError::NotWaiting);
        }
        status.sc_approval_timestamp = Some(env.ledger().timestamp());
        store.save_upgrade(&id, &status);
        Events::emit_approved_by_security_council(&env, &id);
        Ok(())
    }

    fn approve_upgrade_guardians(env: Env, id: BytesN<32>) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.guardians.require_auth();
        let mut status = store.upgrade(&id).ok_or(HandlerError::UpgradeNotFound)?;
        if current_state(&env, &store, &status)? != UpgradeState::Waiting {
            return Err(HandlerError::NotWaiting);
        }
        if status.guardians_approval { return Err(HandlerError::AlreadyApproved); }
        status.guardians_approval = true;
        store.save_upgrade(&id, &status);
        Events::emit_approved_by_guardians(&env, &id);
        Ok(())
    }

    fn extend_legal_veto(env: Env, id: BytesN<32>) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.guardians.require_auth();
        let mut status = store.upgrade(&id).ok_or(HandlerError::UpgradeNotFound)?;
        if status.guardians_extended_legal_veto { return Err(HandlerError::LegalVetoAlreadyExtended); }
        if current_state(&env, &store, &status)? != UpgradeState::LegalVetoPeriod {
            return Err(HandlerError::NotInLegalVetoPeriod);
        }
        status.guardians_extended_legal_veto = true;
        store.save_upgrade(&id, &status);
        Events::emit_legal_veto_extended(&env, &id);
        Ok(())
    }

    fn execute(env: Env, proposal: UpgradeProposal) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        let id = upgrade_id(&env, &proposal);
        let mut status = store.upgrade(&id).ok_or(HandlerError::NotReady)?;
        if current_state(&env, &store, &status)? != UpgradeState::Ready {
            return Err(HandlerError::NotReady);
        }
        if let Some(executor) = &proposal.executor {
            executor.require_auth();
        }

        // Completion is recorded before any call of the batch runs, so a call
        // re-entering `execute` observes the upgrade as no longer ready.
        status.executed = true;
        store.save_upgrade(&id, &status);
        freeze::close_cycle(&env, &store)?;

        execution::execute_calls(&env, &store, &proposal.calls)?;
        log!(&env, "upgrade executed", id);
        Events::emit_executed(&env, &id);
        Ok(())
    }

    fn execute_emergency_upgrade(env: Env, proposal: UpgradeProposal) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.emergency_upgrade_board.require_auth();
        let id = upgrade_id(&env, &proposal);
        if store.has_upgrade(&id) { return Err(HandlerError::UpgradeAlreadyExists); }

        let now = env.ledger().timestamp();
        let status = UpgradeStatus {
            creation_timestamp: now,
            sc_approval_timestamp: Some(now),
            guardians_approval: false,
            guardians_extended_legal_veto: false,
            executed: true,
        };
        store.save_upgrade(&id, &status);
        freeze::close_cycle(&env, &store)?;

        execution::execute_calls(&env, &store, &proposal.calls)?;
        log!(&env, "emergency upgrade executed", id);
        Events::emit_emergency_executed(&env, &id);
        Ok(())
    }

    fn soft_freeze(env: Env) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.security_council.require_auth();
        let frozen_until = freeze::soft_freeze(&env, &store)?;
        Events::emit_soft_freeze(&env, frozen_until);
        Ok(())
    }

    fn hard_freeze(env: Env) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.security_council.require_auth();
        let frozen_until = freeze::hard_freeze(&env, &store)?;
        Events::emit_hard_freeze(&env, frozen_until);
        Ok(())
    }

    fn unfreeze(env: Env) -> Result<(), HandlerError> {
        let store = Storage::new(&env);
        store.config()?.security_council.require_auth();
        freeze::unfreeze(&env, &store)?;
        Events::emit_unfreeze(&env);
        Ok(())
    }

    fn reinforce_freeze(env: Env) -> Result<(), HandlerError> {
        let frozen_until = freeze::reinforce_freeze(&env, &Storage::new(&env), None)?;
        Events::emit_reinforce_freeze(&env, frozen_until);
        Ok(())
    }

    fn reinforce_freeze_one_chain(env: Env, chain_id: u64) -> Result<(), HandlerError> {
        freeze::reinforce_freeze(&env, &Storage::new(&env), Some(chain_id))?;
        Events::emit_reinforce_freeze_one_chain(&env, chain_id);
        Ok(())
    }

    fn reinforce_unfreeze(env: Env) -> Result<(), HandlerError> {
        freeze::reinforce_unfreeze(&env, &Storage::new(&env), None)?;
        Events::emit_reinforce_unfreeze(&env);
        Ok(())
    }

    fn reinforce_unfreeze_one_chain(env: Env, chain_id: u64) -> Result<(), HandlerError> {
        freeze::reinforce_unfreeze(&env, &Storage::new(&env), Some(chain_id))?;
        Events::emit_reinforce_unfreeze_one_chain(&env, chain_id);
        Ok(())
    }

    fn upgrade_state(env: Env, id: BytesN<32>) -> Result<UpgradeState, HandlerError> {
        let store = Storage::new(&env);
        let timings = store.timings()?;
        Ok(state::upgrade_state(store.upgrade(&id).as_ref(), &timings, env.ledger().timestamp()))
    }

    fn upgrade_status(env: Env, id: BytesN<32>) -> Result<UpgradeStatus, HandlerError> {
        Storage::new(&env).upgrade(&id).ok_or(HandlerError::UpgradeNotFound)
    }

    fn upgrade_id(env: Env, proposal: UpgradeProposal) -> BytesN<32> { upgrade_id(&env, &proposal) }
    fn config(env: Env) -> Result<HandlerConfig, HandlerError> { Storage::new(&env).config() }
    fn timings(env: Env) -> Result<UpgradeTimings, HandlerError> { Storage::new(&env).timings() }
    fn freeze_status(env: Env) -> FreezeStatus { Storage::new(&env).freeze_status() }
    fn protocol_frozen_until(env: Env) -> u64 { Storage::new(&env).protocol_frozen_until() }
}

fn current_state(env: &Env, store: &Storage, status: &UpgradeStatus) -> Result<UpgradeState, HandlerError> {
    Ok(state::upgrade_state(Some(status), &store.timings()?, env.ledger().timestamp()))
}

#[cfg(test)]
mod test_flow;
