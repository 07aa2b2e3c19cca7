use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HandlerError {
    // Setup
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidTimings = 3,

    // Admission
    UpgradeAlreadyExists = 10,
    InvalidInclusionProof = 11,
    UpgradeNotFound = 12,

    // Phase
    NotWaiting = 20,
    NotInLegalVetoPeriod = 21,
    LegalVetoAlreadyExtended = 22,
    AlreadyApproved = 23,
    NotReady = 24,

    // Execution
    UnsupportedSelfCall = 30,
    InvalidSelfCallArgs = 31,
    InvalidCallValue = 32,

    // Freeze
    AlreadyFrozen = 40,
    CannotHardFreeze = 41,
    UnexpectedFreezeStatus = 42,
    NotFrozen = 43,
    StillFrozen = 44,
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::AlreadyInitialized => write!(f, "Handler is already initialized"),
            HandlerError::NotInitialized => write!(f, "Handler is not initialized"),
            HandlerError::InvalidTimings => write!(f, "Upgrade timings are inconsistent"),

            HandlerError::UpgradeAlreadyExists => write!(f, "Upgrade with this id already exists"),
            HandlerError::InvalidInclusionProof => write!(f, "Failed to check upgrade proposal initiation"),
            HandlerError::UpgradeNotFound => write!(f, "Upgrade with this id does not exist"),

            HandlerError::NotWaiting => write!(f, "Upgrade is not waiting for approvals"),
            HandlerError::NotInLegalVetoPeriod => write!(f, "Upgrade is not in its legal veto period"),
            HandlerError::LegalVetoAlreadyExtended => write!(f, "Legal veto period is already extended"),
            HandlerError::AlreadyApproved => write!(f, "Upgrade is already approved by guardians"),
            HandlerError::NotReady => write!(f, "Upgrade is not yet ready"),

            HandlerError::UnsupportedSelfCall => write!(f, "Unsupported call to the handler itself"),
            HandlerError::InvalidSelfCallArgs => write!(f, "Self call expects a single address"),
            HandlerError::InvalidCallValue => write!(f, "Invalid value attached to call"),

            HandlerError::AlreadyFrozen => write!(f, "Protocol already frozen"),
            HandlerError::CannotHardFreeze => write!(f, "Protocol can't be hard frozen"),
            HandlerError::UnexpectedFreezeStatus => write!(f, "Unexpected last freeze status"),
            HandlerError::NotFrozen => write!(f, "Protocol should be already frozen"),
            HandlerError::StillFrozen => write!(f, "Protocol should be already unfrozen"),
        }
    }
}
