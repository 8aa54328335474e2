//! Scroll-position tracking for the navbar
//!
//! Runs on every scroll event at native frequency, no debouncing. Both
//! checks are pure functions of the scroll offset, so re-running them is
//! always safe.

use crate::config::NavConfig;
use crate::page::Section;

/// Computes which section the viewport currently sits in and whether the
/// navbar should use its scrolled style
#[derive(Debug, Clone)]
pub struct SectionTracker {
    header_offset: u32,
    navbar_threshold: u32,
}

impl SectionTracker {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            header_offset: config.header_offset,
            navbar_threshold: config.navbar_threshold,
        }
    }

    /// The section whose range contains `scroll + header_offset`.
    ///
    /// Sections without a nav label are skipped. When ranges overlap, the
    /// last matching section in document order wins; the caller gets one
    /// deterministic answer either way.
    pub fn active_section<'a>(&self, scroll: u32, sections: &'a [Section]) -> Option<&'a Section> {
        let effective = scroll + self.header_offset;
        let mut active = None;
        for section in sections.iter().filter(|s| s.nav_label.is_some()) {
            if section.contains(effective) {
                active = Some(section);
            }
        }
        active
    }

    /// True once the scroll offset passes the threshold. Idempotent.
    #[inline]
    pub fn navbar_scrolled(&self, scroll: u32) -> bool {
        scroll > self.navbar_threshold
    }
}
