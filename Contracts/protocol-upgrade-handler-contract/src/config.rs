use crate::{error::HandlerError, types::UpgradeTimings};

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;

pub const STANDARD_LEGAL_VETO_PERIOD: u64 = 3 * DAY;
pub const EXTENDED_LEGAL_VETO_PERIOD: u64 = 7 * DAY;
pub const UPGRADE_WAIT_OR_EXPIRE_PERIOD: u64 = 30 * DAY;
pub const UPGRADE_DELAY_PERIOD: u64 = DAY;
pub const SOFT_FREEZE_PERIOD: u64 = 12 * HOUR;
pub const HARD_FREEZE_PERIOD: u64 = 7 * DAY;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
/// Upgrade records outlive the longest path to execution by a wide margin.
pub(crate) const UPGRADE_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const UPGRADE_LIFETIME_THRESHOLD: u32 = UPGRADE_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

impl UpgradeTimings {
    pub fn standard() -> Self {
        Self {
            legal_veto_period: STANDARD_LEGAL_VETO_PERIOD,
            extended_legal_veto_period: EXTENDED_LEGAL_VETO_PERIOD,
            upgrade_wait_or_expire_period: UPGRADE_WAIT_OR_EXPIRE_PERIOD,
            upgrade_delay_period: UPGRADE_DELAY_PERIOD,
            soft_freeze_period: SOFT_FREEZE_PERIOD,
            hard_freeze_period: HARD_FREEZE_PERIOD,
        }
    }

    pub fn validate(&self) -> Result<(), HandlerError> {
        let non_zero = self.legal_veto_period > 0 && self.upgrade_delay_period > 0 && self.soft_freeze_period > 0;
        let ordered = self.legal_veto_period < self.extended_legal_veto_period
            && self.upgrade_delay_period < self.upgrade_wait_or_expire_period
            && self.soft_freeze_period < self.hard_freeze_period;
        if non_zero && ordered { Ok(()) } else { Err(HandlerError::InvalidTimings) }
    }
}
