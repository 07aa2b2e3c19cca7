use soroban_sdk::{contracttype, BytesN};

/// Actions the Guardians sign. Every variant carries its signed expiration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuardiansAction {
    ApproveUpgrade(BytesN<32>, u64),
    ExtendLegalVeto(BytesN<32>, u64),
}
