#![no_std]
//! Governance Core
//!
//! Primitives shared by the upgrade governance contracts: the threshold
//! signature verifier used by every committee, the domain-separated digest
//! that committee members sign, the upgrade proposal types and the client
//! interfaces of the collaborators the contracts talk to.

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod committee;
mod config;
mod digest;
mod error;
mod events;
pub mod interfaces;
mod multisig;
mod proposal;
mod signer;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use crate::committee::Committee;
pub use crate::config::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, VALID_SIGNATURE_MAGIC};
pub use crate::digest::{hash_typed_data, Domain};
pub use crate::error::CommitteeError;
pub use crate::events::{Eip1271ThresholdUpdatedEvent, MembersUpdatedEvent};
pub use crate::multisig::{check_signatures, is_valid_signature};
pub use crate::proposal::{upgrade_id, Call, UpgradeProposal};
pub use crate::signer::{valid_signature_magic, verify_signature, SignatureSet, Signer};
