//! Staggered reveal scheduling
//!
//! Cards that enter the viewport together would otherwise all pop in on the
//! same frame. Each card in a batch is delayed by its batch index times a
//! fixed increment; everything else reveals immediately. Scheduled reveals
//! are fire-and-forget: nothing cancels or awaits them.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::config::RevealConfig;
use crate::page::RevealGroup;

#[derive(Debug, Clone)]
struct Pending {
    id: String,
    due: Instant,
}

/// Delays card reveals within a batch by `batch_index * increment`
#[derive(Debug, Clone)]
pub struct StaggerScheduler {
    increment: Duration,
    pending: Vec<Pending>,
}

impl StaggerScheduler {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            increment: Duration::from_millis(config.stagger_increment_ms),
            pending: Vec::new(),
        }
    }

    /// Queue a batch of just-visible elements.
    ///
    /// The delay is computed from the element's index within the whole
    /// batch, so a batch of K cards finishes over (K-1) increments.
    pub fn schedule(&mut self, batch: &[(String, RevealGroup)], now: Instant) {
        for (index, (id, group)) in batch.iter().enumerate() {
            let delay = match group {
                RevealGroup::Card => self.increment * index as u32,
                RevealGroup::Generic => Duration::ZERO,
            };
            trace!(%id, ?delay, "reveal scheduled");
            self.pending.push(Pending {
                id: id.clone(),
                due: now + delay,
            });
        }
    }

    /// Drain and return the ids whose delay has elapsed, in schedule order
    pub fn poll(&mut self, now: Instant) -> Vec<String> {
        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(p.id.clone());
                false
            } else {
                true
            }
        });
        due
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> (String, RevealGroup) {
        (id.to_string(), RevealGroup::Card)
    }

    fn generic(id: &str) -> (String, RevealGroup) {
        (id.to_string(), RevealGroup::Generic)
    }

    fn scheduler() -> StaggerScheduler {
        StaggerScheduler::new(&RevealConfig::default())
    }

    #[test]
    fn test_generic_elements_fire_immediately() {
        let mut sched = scheduler();
        let now = Instant::now();
        sched.schedule(&[generic("hero"), generic("about")], now);
        assert_eq!(sched.poll(now), vec!["hero", "about"]);
        assert!(!sched.has_pending());
    }

    #[test]
    fn test_cards_spaced_by_increment() {
        let mut sched = scheduler();
        let now = Instant::now();
        sched.schedule(&[card("a"), card("b"), card("c")], now);

        // Index 0 is due immediately
        assert_eq!(sched.poll(now), vec!["a"]);

        // Index 1 at exactly one increment
        let t1 = now + Duration::from_millis(80);
        assert_eq!(sched.poll(t1), vec!["b"]);

        // Index 2 one increment later
        let t2 = now + Duration::from_millis(160);
        assert_eq!(sched.poll(t2), vec!["c"]);
        assert!(!sched.has_pending());
    }

    #[test]
    fn test_nothing_due_before_increment() {
        let mut sched = scheduler();
        let now = Instant::now();
        sched.schedule(&[card("a"), card("b")], now);
        sched.poll(now);

        let early = now + Duration::from_millis(79);
        assert!(sched.poll(early).is_empty());
        assert!(sched.has_pending());
    }

    #[test]
    fn test_mixed_batch_indexing() {
        // A generic element occupies a batch slot but takes no delay; the
        // card behind it is still delayed by its batch index
        let mut sched = scheduler();
        let now = Instant::now();
        sched.schedule(&[generic("hero"), card("a")], now);

        assert_eq!(sched.poll(now), vec!["hero"]);
        assert_eq!(sched.poll(now + Duration::from_millis(80)), vec!["a"]);
    }

    #[test]
    fn test_late_poll_preserves_schedule_order() {
        let mut sched = scheduler();
        let now = Instant::now();
        sched.schedule(&[card("a"), card("b"), card("c")], now);

        let late = now + Duration::from_secs(1);
        assert_eq!(sched.poll(late), vec!["a", "b", "c"]);
    }
}
