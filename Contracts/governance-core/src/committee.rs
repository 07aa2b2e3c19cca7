use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, Vec};

use crate::{
    config::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::CommitteeError,
    events::Events,
    multisig,
    signer::Signer,
};

#[contracttype]
#[derive(Clone)]
pub enum CommitteeKey {
    Handler,
    Members,
    Eip1271Threshold,
}

/// Instance-storage view of a fixed-size committee.
///
/// Membership and the `is_valid_signature` threshold can only be changed by
/// the upgrade handler, i.e. through an executed upgrade.
pub struct Committee<'a> {
    env: &'a Env,
    size: u32,
}

impl<'a> Committee<'a> {
    pub fn new(env: &'a Env, size: u32) -> Self { Self { env, size } }

    pub fn is_initialized(&self) -> bool { self.env.storage().instance().has(&CommitteeKey::Members) }
    pub fn require_initialized(&self) -> Result<(), CommitteeError> { if self.is_initialized() { Ok(()) } else { Err(CommitteeError::NotInitialized) } }

    pub fn init(&self, handler: &Address, members: &Vec<Signer>, eip1271_threshold: u32) -> Result<(), CommitteeError> {
        if self.is_initialized() { return Err(CommitteeError::AlreadyInitialized); }
        self.validate_members(members)?;
        self.validate_threshold(eip1271_threshold)?;
        let storage = self.env.storage().instance();
        storage.set(&CommitteeKey::Handler, handler);
        storage.set(&CommitteeKey::Members, members);
        storage.set(&CommitteeKey::Eip1271Threshold, &eip1271_threshold);
        self.bump();
        Ok(())
    }

    pub fn handler(&self) -> Result<Address, CommitteeError> {
        self.env.storage().instance().get(&CommitteeKey::Handler).ok_or(CommitteeError::NotInitialized)
    }

    pub fn members(&self) -> Result<Vec<Signer>, CommitteeError> {
        self.env.storage().instance().get(&CommitteeKey::Members).ok_or(CommitteeError::NotInitialized)
    }

    pub fn eip1271_threshold(&self) -> Result<u32, CommitteeError> {
        self.env.storage().instance().get(&CommitteeKey::Eip1271Threshold).ok_or(CommitteeError::NotInitialized)
    }

    /// Replaces the whole member list. Only callable by the handler.
    pub fn update_members(&self, members: &Vec<Signer>) -> Result<(), CommitteeError> {
        self.handler()?.require_auth();
        self.validate_members(members)?;
        let old_members = self.members()?;
        self.env.storage().instance().set(&CommitteeKey::Members, members);
        self.bump();
        Events::emit_members_updated(self.env, old_members, members.clone());
        Ok(())
    }

    /// Only callable by the handler.
    pub fn set_eip1271_threshold(&self, threshold: u32) -> Result<(), CommitteeError> {
        self.handler()?.require_auth();
        self.validate_threshold(threshold)?;
        let old_threshold = self.eip1271_threshold()?;
        self.env.storage().instance().set(&CommitteeKey::Eip1271Threshold, &threshold);
        self.bump();
        Events::emit_eip1271_threshold_updated(self.env, old_threshold, threshold);
        Ok(())
    }

    pub fn check_signatures(
        &self,
        digest: &BytesN<32>,
        signers: &Vec<Signer>,
        signatures: &Vec<Bytes>,
        threshold: u32,
    ) -> Result<(), CommitteeError> {
        let members = self.members()?;
        multisig::check_signatures(self.env, &members, digest, signers, signatures, threshold)
    }

    /// Signature check for an action carrying a signed expiration.
    pub fn check_action(
        &self,
        digest: &BytesN<32>,
        valid_until: u64,
        signers: &Vec<Signer>,
        signatures: &Vec<Bytes>,
        threshold: u32,
    ) -> Result<(), CommitteeError> {
        if self.env.ledger().timestamp() > valid_until {
            return Err(CommitteeError::SignatureExpired);
        }
        self.check_signatures(digest, signers, signatures, threshold)
    }

    pub fn is_valid_signature(&self, digest: &BytesN<32>, signature: &Bytes) -> Result<BytesN<4>, CommitteeError> {
        let members = self.members()?;
        let threshold = self.eip1271_threshold()?;
        multisig::is_valid_signature(self.env, &members, threshold, digest, signature)
    }

    fn validate_members(&self, members: &Vec<Signer>) -> Result<(), CommitteeError> {
        if members.len() != self.size { return Err(CommitteeError::InvalidMembersCount); }
        for i in 1..members.len() {
            if members.get_unchecked(i - 1) >= members.get_unchecked(i) {
                return Err(CommitteeError::MembersNotSorted);
            }
        }
        Ok(())
    }

    fn validate_threshold(&self, threshold: u32) -> Result<(), CommitteeError> {
        if threshold == 0 || threshold > self.size { return Err(CommitteeError::InvalidThreshold); }
        Ok(())
    }

    fn bump(&self) {
        self.env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
