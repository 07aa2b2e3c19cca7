//! Emergency freeze state machine.
//!
//! Each upgrade cycle allows at most one soft freeze followed by one hard
//! freeze. Executing an upgrade closes the cycle and restores the budget.

use governance_core::interfaces::ChainManagerClient;
use soroban_sdk::{log, Address, Env};

use crate::{error::HandlerError, storage::Storage, types::FreezeStatus};

/// Returns the time the protocol stays frozen until.
pub fn soft_freeze(env: &Env, store: &Storage) -> Result<u64, HandlerError> {
    if store.freeze_status() != FreezeStatus::None {
        return Err(HandlerError::AlreadyFrozen);
    }
    let frozen_until = env.ledger().timestamp().saturating_add(store.timings()?.soft_freeze_period);
    store.set_freeze(FreezeStatus::Soft, frozen_until);
    freeze_all(env, &store.config()?.chain_manager);
    Ok(frozen_until)
}

/// Returns the time the protocol stays frozen until.
pub fn hard_freeze(env: &Env, store: &Storage) -> Result<u64, HandlerError> {
    match store.freeze_status() {
        FreezeStatus::None | FreezeStatus::Soft | FreezeStatus::AfterSoftFreeze => {}
        FreezeStatus::Hard | FreezeStatus::AfterHardFreeze => return Err(HandlerError::CannotHardFreeze),
    }
    let frozen_until = env.ledger().timestamp().saturating_add(store.timings()?.hard_freeze_period);
    store.set_freeze(FreezeStatus::Hard, frozen_until);
    freeze_all(env, &store.config()?.chain_manager);
    Ok(frozen_until)
}

pub fn unfreeze(env: &Env, store: &Storage) -> Result<(), HandlerError> {
    let next = match store.freeze_status() {
        FreezeStatus::Soft => FreezeStatus::AfterSoftFreeze,
        FreezeStatus::Hard => FreezeStatus::AfterHardFreeze,
        _ => return Err(HandlerError::UnexpectedFreezeStatus),
    };
    store.set_freeze(next, 0);
    unfreeze_all(env, &store.config()?.chain_manager);
    Ok(())
}

/// Re-sends the freeze directive while a freeze is in force.
pub fn reinforce_freeze(env: &Env, store: &Storage, chain_id: Option<u64>) -> Result<u64, HandlerError> {
    let frozen_until = store.protocol_frozen_until();
    if frozen_until <= env.ledger().timestamp() {
        return Err(HandlerError::NotFrozen);
    }
    let chain_manager = store.config()?.chain_manager;
    match chain_id {
        Some(chain_id) => ChainManagerClient::new(env, &chain_manager).freeze_chain(&chain_id),
        None => freeze_all(env, &chain_manager),
    }
    Ok(frozen_until)
}

/// Re-sends the unfreeze directive once no freeze is in force, including
/// after a freeze period ran out without an explicit unfreeze.
pub fn reinforce_unfreeze(env: &Env, store: &Storage, chain_id: Option<u64>) -> Result<(), HandlerError> {
    if store.protocol_frozen_until() > env.ledger().timestamp() {
        return Err(HandlerError::StillFrozen);
    }
    let chain_manager = store.config()?.chain_manager;
    match chain_id {
        Some(chain_id) => ChainManagerClient::new(env, &chain_manager).unfreeze_chain(&chain_id),
        None => unfreeze_all(env, &chain_manager),
    }
    Ok(())
}

/// Ends the freeze cycle when an upgrade gets executed.
pub fn close_cycle(env: &Env, store: &Storage) -> Result<(), HandlerError> {
    if store.freeze_status() == FreezeStatus::None {
        return Ok(());
    }
    store.set_freeze(FreezeStatus::None, 0);
    unfreeze_all(env, &store.config()?.chain_manager);
    Ok(())
}

// A chain already in the requested state must not block the others.
fn freeze_all(env: &Env, chain_manager: &Address) {
    let client = ChainManagerClient::new(env, chain_manager);
    for chain_id in client.chain_ids().iter() {
        if client.try_freeze_chain(&chain_id).is_err() {
            log!(env, "freeze directive rejected", chain_id);
        }
    }
}

fn unfreeze_all(env: &Env, chain_manager: &Address) {
    let client = ChainManagerClient::new(env, chain_manager);
    for chain_id in client.chain_ids().iter() {
        if client.try_unfreeze_chain(&chain_id).is_err() {
            log!(env, "unfreeze directive rejected", chain_id);
        }
    }
}
