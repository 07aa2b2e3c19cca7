//! Batch execution of upgrade calls.

use governance_core::Call;
use soroban_sdk::{log, token, Address, Env, Symbol, TryFromVal, Val, Vec};

use crate::{error::HandlerError, events::Events, storage::Storage};

const SET_GUARDIANS: &str = "set_guardians";
const SET_SECURITY_COUNCIL: &str = "set_security_council";
const SET_EMERGENCY_UPGRADE_BOARD: &str = "set_emergency_upgrade_board";
const SET_CHAIN_MANAGER: &str = "set_chain_manager";

/// Runs `calls` in order. A failing call aborts the whole invocation, so the
/// batch is applied entirely or not at all.
pub fn execute_calls(env: &Env, store: &Storage, calls: &Vec<Call>) -> Result<(), HandlerError> {
    let this = env.current_contract_address();
    for call in calls.iter() {
        if call.target == this {
            apply_self_call(env, store, &call)?;
            continue;
        }
        if call.value < 0 {
            return Err(HandlerError::InvalidCallValue);
        }
        if call.value > 0 {
            let native = token::Client::new(env, &store.config()?.native_token);
            native.transfer(&this, &call.target, &call.value);
        }
        let _: Val = env.invoke_contract(&call.target, &call.function, call.args.clone());
    }
    Ok(())
}

/// Self-administration. Soroban forbids re-entering the handler, so calls
/// addressed to it are applied here instead of being invoked.
fn apply_self_call(env: &Env, store: &Storage, call: &Call) -> Result<(), HandlerError> {
    if call.value != 0 {
        return Err(HandlerError::InvalidCallValue);
    }
    if call.args.len() != 1 {
        return Err(HandlerError::InvalidSelfCallArgs);
    }
    let new = Address::try_from_val(env, &call.args.get_unchecked(0))
        .map_err(|_| HandlerError::InvalidSelfCallArgs)?;

    let mut config = store.config()?;
    let slot = if call.function == Symbol::new(env, SET_GUARDIANS) {
        &mut config.guardians
    } else if call.function == Symbol::new(env, SET_SECURITY_COUNCIL) {
        &mut config.security_council
    } else if call.function == Symbol::new(env, SET_EMERGENCY_UPGRADE_BOARD) {
        &mut config.emergency_upgrade_board
    } else if call.function == Symbol::new(env, SET_CHAIN_MANAGER) {
        &mut config.chain_manager
    } else {
        return Err(HandlerError::UnsupportedSelfCall);
    };
    let old = core::mem::replace(slot, new.clone());
    store.save_config(&config);
    log!(env, "handler setting changed", call.function, new);
    Events::emit_address_changed(env, &call.function, old, new);
    Ok(())
}
