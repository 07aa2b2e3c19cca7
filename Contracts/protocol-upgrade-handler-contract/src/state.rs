//! Upgrade phase derivation.
//!
//! The phase is never stored. It is recomputed from the upgrade record and
//! the ledger time on every read, so it cannot drift from its inputs.

use crate::types::{UpgradeState, UpgradeStatus, UpgradeTimings};

pub fn upgrade_state(status: Option<&UpgradeStatus>, timings: &UpgradeTimings, now: u64) -> UpgradeState {
    let Some(status) = status else {
        return UpgradeState::None;
    };
    if status.executed {
        return UpgradeState::Done;
    }

    // Security Council approval short-circuits the Guardians-only path.
    if let Some(approved_at) = status.sc_approval_timestamp {
        return if now < approved_at.saturating_add(timings.upgrade_delay_period) {
            UpgradeState::ExecutionPending
        } else {
            UpgradeState::Ready
        };
    }

    let legal_veto_period = if status.guardians_extended_legal_veto {
        timings.extended_legal_veto_period
    } else {
        timings.legal_veto_period
    };
    let legal_veto_end = status.creation_timestamp.saturating_add(legal_veto_period);
    if now < legal_veto_end {
        return UpgradeState::LegalVetoPeriod;
    }

    let waiting_end = legal_veto_end.saturating_add(timings.upgrade_wait_or_expire_period);
    if now < waiting_end {
        return UpgradeState::Waiting;
    }
    if !status.guardians_approval {
        return UpgradeState::Expired;
    }
    if now < waiting_end.saturating_add(timings.upgrade_delay_period) {
        return UpgradeState::ExecutionPending;
    }
    UpgradeState::Ready
}
