//! Versioned scheduling for timed window transitions.
//!
//! Every transition start bumps the window's version and hands out a [`TransitionTicket`]. When
//! the timer fires, the ticket's terminal mutation applies only if its version is still current,
//! so an older job can never overwrite the result of a newer one.

use std::collections::BTreeMap;

use crate::model::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Open,
    Minimize,
    Restore,
    Close,
}

impl TransitionKind {
    /// Animation duration in milliseconds.
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Open => 160,
            Self::Minimize => 180,
            Self::Restore => 180,
            Self::Close => 140,
        }
    }

    /// Delay before the completion job fires; zero under reduced motion.
    pub const fn delay_ms(self, reduced_motion: bool) -> u32 {
        if reduced_motion {
            0
        } else {
            self.duration_ms()
        }
    }
}

/// Handle for one scheduled transition job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    pub window_id: WindowId,
    pub kind: TransitionKind,
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionScheduler {
    versions: BTreeMap<WindowId, u64>,
}

impl TransitionScheduler {
    /// Starts a transition, invalidating every earlier ticket for the window.
    pub fn begin(&mut self, window_id: WindowId, kind: TransitionKind) -> TransitionTicket {
        let version = self.versions.entry(window_id).or_insert(0);
        *version = version.saturating_add(1);
        TransitionTicket {
            window_id,
            kind,
            version: *version,
        }
    }

    pub fn is_current(&self, ticket: &TransitionTicket) -> bool {
        self.versions.get(&ticket.window_id) == Some(&ticket.version)
    }

    pub fn version(&self, window_id: WindowId) -> Option<u64> {
        self.versions.get(&window_id).copied()
    }

    /// Drops the version entry of a removed window; its outstanding tickets become stale.
    pub fn forget(&mut self, window_id: WindowId) {
        self.versions.remove(&window_id);
    }
}
