//! Viewport intersection tracking with at-most-once firing

use tracing::debug;

use crate::config::RevealConfig;
use crate::page::{RevealGroup, WatchedElement};

/// One element still waiting to become visible
#[derive(Debug, Clone)]
struct Watched {
    id: String,
    group: RevealGroup,
    top: u32,
    height: u32,
}

/// Watches a set of element extents for entering the viewport.
///
/// Each element fires at most once: as soon as at least `threshold` of its
/// height sits inside the trigger zone it is reported and unsubscribed.
/// Elements that never intersect simply never fire.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    bottom_margin: i32,
    waiting: Vec<Watched>,
}

impl RevealObserver {
    pub fn new(config: &RevealConfig, elements: &[WatchedElement]) -> Self {
        let waiting = elements
            .iter()
            .filter(|e| !e.is_revealed())
            .map(|e| Watched {
                id: e.id.clone(),
                group: e.group,
                top: e.top,
                height: e.height,
            })
            .collect();
        Self {
            threshold: config.visibility_threshold,
            bottom_margin: config.bottom_margin,
            waiting,
        }
    }

    /// Number of elements that have not fired yet
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Report the batch of elements that just became visible in the given
    /// viewport, in document order, and unsubscribe them.
    ///
    /// The trigger zone is the viewport with its bottom edge shifted by
    /// `bottom_margin` (negative shrinks it).
    pub fn observe(&mut self, viewport_top: u32, viewport_height: u32) -> Vec<(String, RevealGroup)> {
        let zone_top = viewport_top as i64;
        let zone_bottom = viewport_top as i64 + viewport_height as i64 + self.bottom_margin as i64;
        if zone_bottom <= zone_top {
            return Vec::new();
        }

        let threshold = self.threshold;
        let mut fired = Vec::new();
        self.waiting.retain(|el| {
            if visible_fraction(el.top, el.height, zone_top, zone_bottom) >= threshold {
                fired.push((el.id.clone(), el.group));
                false
            } else {
                true
            }
        });

        if !fired.is_empty() {
            debug!(count = fired.len(), viewport_top, "reveal batch fired");
        }
        fired
    }
}

/// Fraction of the element's height inside [zone_top, zone_bottom)
fn visible_fraction(top: u32, height: u32, zone_top: i64, zone_bottom: i64) -> f64 {
    let el_top = top as i64;
    let el_bottom = el_top + height as i64;
    let overlap = zone_bottom.min(el_bottom) - zone_top.max(el_top);
    if overlap <= 0 {
        return 0.0;
    }
    if height == 0 {
        return 1.0;
    }
    overlap as f64 / height as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements() -> Vec<WatchedElement> {
        vec![
            WatchedElement::new("hero", RevealGroup::Generic, 0, 100),
            WatchedElement::new("card-a", RevealGroup::Card, 200, 40),
            WatchedElement::new("card-b", RevealGroup::Card, 200, 40),
            WatchedElement::new("footer", RevealGroup::Generic, 900, 100),
        ]
    }

    fn observer() -> RevealObserver {
        RevealObserver::new(&RevealConfig::default(), &elements())
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut obs = observer();
        let first = obs.observe(0, 300);
        assert!(first.iter().any(|(id, _)| id == "hero"));

        // Same viewport again: nothing new fires
        assert!(obs.observe(0, 300).is_empty());

        // Scrolling away and back does not re-fire
        obs.observe(5000, 300);
        assert!(obs.observe(0, 300).is_empty());
    }

    #[test]
    fn test_offscreen_element_never_fires() {
        let mut obs = observer();
        let fired = obs.observe(0, 300);
        assert!(!fired.iter().any(|(id, _)| id == "footer"));
        assert_eq!(obs.waiting_len(), 1);
    }

    #[test]
    fn test_bottom_margin_shrinks_zone() {
        // Zone is [0, 250): the cards at 200..240 sit fully inside, but the
        // margin pulls the edge to 250 so they are 40/40 visible; tighten
        // the margin so only 10 units fit and the 0.1 threshold still trips
        let config = RevealConfig {
            bottom_margin: -90, // zone [0, 210): 10 of 40 units visible
            ..Default::default()
        };
        let mut obs = RevealObserver::new(&config, &elements());
        let fired = obs.observe(0, 300);
        assert!(fired.iter().any(|(id, _)| id == "card-a"));

        // A harsher margin keeps the cards below the zone entirely
        let config = RevealConfig {
            bottom_margin: -150, // zone [0, 150)
            ..Default::default()
        };
        let mut obs = RevealObserver::new(&config, &elements());
        let fired = obs.observe(0, 300);
        assert!(!fired.iter().any(|(id, _)| id == "card-a"));
    }

    #[test]
    fn test_threshold_fraction() {
        // 3 of 40 units visible = 7.5%, below the 10% threshold
        let mut obs = observer();
        let fired = obs.observe(0, 253); // zone [0, 203)
        assert!(!fired.iter().any(|(id, _)| id == "card-a"));

        // 5 of 40 units visible = 12.5%, above threshold
        let fired = obs.observe(0, 255); // zone [0, 205)
        assert!(fired.iter().any(|(id, _)| id == "card-a"));
    }

    #[test]
    fn test_batch_keeps_document_order() {
        let mut obs = observer();
        let fired = obs.observe(0, 350);
        let ids: Vec<&str> = fired.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "card-a", "card-b"]);
    }

    #[test]
    fn test_degenerate_zone_fires_nothing() {
        let config = RevealConfig {
            bottom_margin: -400,
            ..Default::default()
        };
        let mut obs = RevealObserver::new(&config, &elements());
        assert!(obs.observe(0, 300).is_empty());
    }

    #[test]
    fn test_already_revealed_not_watched() {
        let mut els = elements();
        els[0].mark_revealed();
        let mut obs = RevealObserver::new(&RevealConfig::default(), &els);
        let fired = obs.observe(0, 300);
        assert!(!fired.iter().any(|(id, _)| id == "hero"));
    }
}
