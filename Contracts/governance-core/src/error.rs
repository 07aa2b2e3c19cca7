use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CommitteeError {
    // Setup
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidMembersCount = 3,
    MembersNotSorted = 4,
    InvalidThreshold = 5,

    // Signature verification
    LengthMismatch = 10,
    InsufficientSignatures = 11,
    InvalidSignature = 12,
    SignerNotMember = 13,

    // Temporal
    SignatureExpired = 20,
}

impl fmt::Display for CommitteeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitteeError::AlreadyInitialized => write!(f, "Committee is already initialized"),
            CommitteeError::NotInitialized => write!(f, "Committee is not initialized"),
            CommitteeError::InvalidMembersCount => write!(f, "Unexpected number of committee members"),
            CommitteeError::MembersNotSorted => write!(f, "Members must be strictly ascending and unique"),
            CommitteeError::InvalidThreshold => write!(f, "Invalid threshold value"),

            CommitteeError::LengthMismatch => write!(f, "Signers and signatures lengths differ"),
            CommitteeError::InsufficientSignatures => write!(f, "Not enough signatures"),
            CommitteeError::InvalidSignature => write!(f, "Signature verification failed"),
            CommitteeError::SignerNotMember => write!(f, "Signer is not a member or is out of order"),

            CommitteeError::SignatureExpired => write!(f, "Signature expired"),
        }
    }
}
