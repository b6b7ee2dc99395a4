#![forbid(unsafe_code)]

//! Single-slot delayed hover timer.
//!
//! Hovering a submenu row schedules that submenu to open after a delay. At
//! most one such task is pending at any time: starting a new one replaces the
//! old, so only the most recently hovered row can fire.
//!
//! The timer does not own a clock or a thread. Callers pass `now` in and
//! either poll with [`take_due`](HoverTimer::take_due) from their event loop,
//! or schedule a native timer and redeem the returned [`TimerToken`] with
//! [`take_token`](HoverTimer::take_token). A token is only honoured while it
//! is still the pending one, so a cancelled task can never fire.
//!
//! A delay too long to be represented as an `Instant` schedules a task with
//! no deadline: it is never due, but its token can still be redeemed.
//!
//! # Invariants
//!
//! 1. At most one pending task.
//! 2. Every `start` invalidates all earlier tokens.
//! 3. A task fires at most once.

use std::time::{Duration, Instant};

use crate::node::{EntryRef, MenuId};

/// Handle for one scheduled hover task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// The pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingHover {
    pub token: TimerToken,
    pub target: EntryRef,
    /// `None` when `now + delay` is not representable.
    pub deadline: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct HoverTimer {
    pending: Option<PendingHover>,
    next_token: u64,
}

impl HoverTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `target` to fire `delay` after `now`, replacing any pending task.
    pub fn start(&mut self, target: EntryRef, now: Instant, delay: Duration) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending = Some(PendingHover {
            token,
            target,
            deadline: now.checked_add(delay),
        });
        token
    }

    /// Drop the pending task, returning it.
    pub fn cancel(&mut self) -> Option<PendingHover> {
        self.pending.take()
    }

    /// Drop the pending task if it targets a row of `menu`.
    pub fn cancel_for(&mut self, menu: MenuId) -> bool {
        if self.pending.is_some_and(|p| p.target.menu == menu) {
            self.pending = None;
            return true;
        }
        false
    }

    /// Take the pending target if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<EntryRef> {
        match self.pending {
            Some(p) if p.deadline.is_some_and(|d| d <= now) => {
                self.pending = None;
                Some(p.target)
            }
            _ => None,
        }
    }

    /// Take the pending target if `token` is still the pending task.
    pub fn take_token(&mut self, token: TimerToken) -> Option<EntryRef> {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                Some(p.target)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingHover> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending task is due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.and_then(|p| p.deadline)
    }
}
