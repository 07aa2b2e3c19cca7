use soroban_sdk::{contracttype, symbol_short, Env, Vec};

use crate::signer::Signer;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MembersUpdatedEvent {
    pub old_members: Vec<Signer>,
    pub new_members: Vec<Signer>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Eip1271ThresholdUpdatedEvent {
    pub old_threshold: u32,
    pub new_threshold: u32,
}

pub(crate) struct Events;

impl Events {
    pub fn emit_members_updated(env: &Env, old_members: Vec<Signer>, new_members: Vec<Signer>) {
        let event = MembersUpdatedEvent { old_members, new_members };
        env.events().publish((symbol_short!("members"),), event);
    }

    pub fn emit_eip1271_threshold_updated(env: &Env, old_threshold: u32, new_threshold: u32) {
        let event = Eip1271ThresholdUpdatedEvent { old_threshold, new_threshold };
        env.events().publish((symbol_short!("thr_1271"),), event);
    }
}
