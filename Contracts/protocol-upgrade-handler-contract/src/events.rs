use governance_core::UpgradeProposal;
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct UpgradeStartedEvent {
    pub id: BytesN<32>,
    pub proposal: UpgradeProposal,
}

#[contracttype]
#[derive(Clone)]
pub struct UpgradeEvent {
    pub id: BytesN<32>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct FreezeEvent {
    pub frozen_until: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ChainEvent {
    pub chain_id: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct AddressChangedEvent {
    pub old: Address,
    pub new: Address,
}

pub struct Events;

impl Events {
    pub fn emit_upgrade_started(env: &Env, id: &BytesN<32>, proposal: &UpgradeProposal) {
        let event = UpgradeStartedEvent { id: id.clone(), proposal: proposal.clone() };
        env.events().publish((symbol_short!("upg_start"),), event);
    }

    pub fn emit_approved_by_guardians(env: &Env, id: &BytesN<32>) {
        Self::emit_upgrade(env, symbol_short!("upg_grd"), id);
    }

    pub fn emit_approved_by_security_council(env: &Env, id: &BytesN<32>) {
        Self::emit_upgrade(env, symbol_short!("upg_sc"), id);
    }

    pub fn emit_legal_veto_extended(env: &Env, id: &BytesN<32>) {
        Self::emit_upgrade(env, symbol_short!("veto_ext"), id);
    }

    pub fn emit_executed(env: &Env, id: &BytesN<32>) {
        Self::emit_upgrade(env, symbol_short!("upg_exec"), id);
    }

    pub fn emit_emergency_executed(env: &Env, id: &BytesN<32>) {
        Self::emit_upgrade(env, symbol_short!("emrg_exec"), id);
    }

    pub fn emit_soft_freeze(env: &Env, frozen_until: u64) {
        env.events().publish((symbol_short!("soft_frz"),), FreezeEvent { frozen_until });
    }

    pub fn emit_hard_freeze(env: &Env, frozen_until: u64) {
        env.events().publish((symbol_short!("hard_frz"),), FreezeEvent { frozen_until });
    }

    pub fn emit_unfreeze(env: &Env) {
        env.events().publish((symbol_short!("unfreeze"),), FreezeEvent { frozen_until: 0 });
    }

    pub fn emit_reinforce_freeze(env: &Env, frozen_until: u64) {
        env.events().publish((symbol_short!("rf_frz"),), FreezeEvent { frozen_until });
    }

    pub fn emit_reinforce_unfreeze(env: &Env) {
        env.events().publish((symbol_short!("rf_unfrz"),), FreezeEvent { frozen_until: 0 });
    }

    pub fn emit_reinforce_freeze_one_chain(env: &Env, chain_id: u64) {
        env.events().publish((symbol_short!("rf_frz1"),), ChainEvent { chain_id });
    }

    pub fn emit_reinforce_unfreeze_one_chain(env: &Env, chain_id: u64) {
        env.events().publish((symbol_short!("rf_unfrz1"),), ChainEvent { chain_id });
    }

    /// `setting` names the self-administration call that changed the address.
    pub fn emit_address_changed(env: &Env, setting: &Symbol, old: Address, new: Address) {
        env.events().publish((symbol_short!("cfg_chg"), setting.clone()), AddressChangedEvent { old, new });
    }

    fn emit_upgrade(env: &Env, topic: Symbol, id: &BytesN<32>) {
        let event = UpgradeEvent { id: id.clone(), timestamp: env.ledger().timestamp() };
        env.events().publish((topic,), event);
    }
}
