use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env, Symbol, Val, Vec};

/// One step of an upgrade batch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub target: Address,
    /// Amount of the native asset sent to `target` before the invocation.
    pub value: i128,
    pub function: Symbol,
    pub args: Vec<Val>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradeProposal {
    pub calls: Vec<Call>,
    /// `None` lets anyone execute the proposal once it is ready.
    pub executor: Option<Address>,
    pub salt: BytesN<32>,
}

/// Content hash identifying a proposal. Identical content and salt collide.
pub fn upgrade_id(env: &Env, proposal: &UpgradeProposal) -> BytesN<32> {
    env.crypto().sha256(&proposal.clone().to_xdr(env)).to_bytes()
}
