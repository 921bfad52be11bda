//! Success banner bookkeeping.
//!
//! A valid submit shows the banner for [`SUCCESS_BANNER_DURATION`]. Every
//! showing gets a fresh [`BannerTicket`]; only the newest ticket can hide the
//! banner, so a timer left over from an earlier submit is a no-op.
//!
//! Time is always passed in, never read here, which keeps the type usable
//! with a paused or simulated clock.

use std::time::{Duration, Instant};

/// How long the banner stays up after a valid submit
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

/// Identifies one showing of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Showing {
    ticket: BannerTicket,
    deadline: Instant,
}

/// Visibility state of the success banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessBanner {
    showing: Option<Showing>,
    issued: u64,
}

impl SuccessBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the banner until `now + SUCCESS_BANNER_DURATION`, replacing any
    /// earlier showing.
    pub fn show(&mut self, now: Instant) -> BannerTicket {
        self.issued += 1;
        let ticket = BannerTicket(self.issued);
        self.showing = Some(Showing {
            ticket,
            deadline: now + SUCCESS_BANNER_DURATION,
        });
        ticket
    }

    pub fn is_visible(&self) -> bool {
        self.showing.is_some()
    }

    /// Ticket of the current showing, if any
    pub fn ticket(&self) -> Option<BannerTicket> {
        self.showing.map(|s| s.ticket)
    }

    fn deadline(&self) -> Option<Instant> {
        self.showing.map(|s| s.deadline)
    }

    /// Time left before the current showing may be hidden
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Hide the banner if `ticket` is the current showing and its deadline
    /// has passed. Returns whether the banner was hidden.
    pub fn expire(&mut self, ticket: BannerTicket, now: Instant) -> bool {
        match self.showing {
            Some(showing) if showing.ticket == ticket && now >= showing.deadline => {
                self.showing = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_by_default() {
        let banner = SuccessBanner::new();
        assert!(!banner.is_visible());
        assert_eq!(banner.remaining(Instant::now()), None);
    }

    #[test]
    fn expires_after_duration() {
        let t0 = Instant::now();
        let mut banner = SuccessBanner::new();
        let ticket = banner.show(t0);
        assert!(banner.is_visible());

        assert!(!banner.expire(ticket, t0 + Duration::from_secs(4)));
        assert!(banner.is_visible());

        assert!(banner.expire(ticket, t0 + SUCCESS_BANNER_DURATION));
        assert!(!banner.is_visible());
    }

    #[test]
    fn stale_ticket_does_not_hide_newer_showing() {
        let t0 = Instant::now();
        let mut banner = SuccessBanner::new();
        let first = banner.show(t0);
        let second = banner.show(t0 + Duration::from_secs(3));
        assert_ne!(first, second);

        // First timer fires at t0 + 5s, second showing must survive it
        assert!(!banner.expire(first, t0 + Duration::from_secs(5)));
        assert!(banner.is_visible());

        assert!(banner.expire(second, t0 + Duration::from_secs(8)));
        assert!(!banner.is_visible());
    }

    #[test]
    fn remaining_counts_down() {
        let t0 = Instant::now();
        let mut banner = SuccessBanner::new();
        banner.show(t0);
        assert_eq!(
            banner.remaining(t0 + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            banner.remaining(t0 + Duration::from_secs(9)),
            Some(Duration::ZERO)
        );
    }
}
