//! Read-only page model
//!
//! The page is described once at startup (from a TOML file or the built-in
//! sample) and consumed by every engine component. Geometry is expressed in
//! abstract page units so the engine stays independent of any rendering
//! surface.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A named content region with a vertical extent and an optional
/// navigation link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Label shown in the navbar; sections without one are skipped by
    /// active-section tracking
    #[serde(default)]
    pub nav_label: Option<String>,
    pub top: u32,
    pub height: u32,
    /// Body paragraphs
    #[serde(default)]
    pub body: Vec<String>,
}

impl Section {
    /// Half-open vertical range check, inclusive start
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// A project card, the grouped reveal category, carrying its filter tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub blurb: String,
    pub top: u32,
    pub height: u32,
    /// Runtime filter state, never persisted
    #[serde(skip)]
    pub hidden: bool,
}

/// Reveal category of a watched element. Cards animate in sequence within
/// a batch; everything else reveals immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealGroup {
    Card,
    Generic,
}

/// An element eligible for scroll-triggered reveal. The revealed flag is
/// monotone: it flips false to true at most once and never reverts.
#[derive(Debug, Clone)]
pub struct WatchedElement {
    pub id: String,
    pub group: RevealGroup,
    pub top: u32,
    pub height: u32,
    revealed: bool,
}

impl WatchedElement {
    pub fn new(id: impl Into<String>, group: RevealGroup, top: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            group,
            top,
            height,
            revealed: false,
        }
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flip to revealed. Idempotent, irreversible.
    pub fn mark_revealed(&mut self) {
        self.revealed = true;
    }
}

/// The whole page: static for the session once loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageModel {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl PageModel {
    /// Load a page description from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut page: PageModel =
            toml::from_str(&content).map_err(|e| crate::Error::Page(e.to_string()))?;
        page.normalize()?;
        Ok(page)
    }

    /// Serialize the page back to TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Page(e.to_string()))
    }

    /// Sort sections into document order and reject degenerate geometry
    fn normalize(&mut self) -> crate::Result<()> {
        self.sections.sort_by_key(|s| s.top);
        for section in &self.sections {
            if section.height == 0 {
                return Err(crate::Error::Page(format!(
                    "section '{}' has zero height",
                    section.id
                )));
            }
        }
        if self.sections.is_empty() {
            return Err(crate::Error::Page("page has no sections".into()));
        }
        Ok(())
    }

    /// Total page height in units (bottom edge of the lowest element)
    pub fn total_height(&self) -> u32 {
        let sections = self.sections.iter().map(|s| s.top + s.height);
        let cards = self.cards.iter().map(|c| c.top + c.height);
        sections.chain(cards).max().unwrap_or(0)
    }

    /// Sections that participate in navbar highlighting, document order
    pub fn nav_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.nav_label.is_some())
    }

    /// Distinct card categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for card in &self.cards {
            if !out.contains(&card.category) {
                out.push(card.category.clone());
            }
        }
        out
    }

    /// Build the watch list: every section body plus every card
    pub fn watched_elements(&self) -> Vec<WatchedElement> {
        let mut watched: Vec<WatchedElement> = self
            .sections
            .iter()
            .map(|s| WatchedElement::new(s.id.clone(), RevealGroup::Generic, s.top, s.height))
            .collect();
        watched.extend(
            self.cards
                .iter()
                .map(|c| WatchedElement::new(c.id.clone(), RevealGroup::Card, c.top, c.height)),
        );
        // Document order so batch indices follow the visual layout
        watched.sort_by_key(|w| w.top);
        watched
    }

    /// Pairs of nav sections whose vertical ranges overlap. Overlap is
    /// legal (last match wins during tracking) but worth reporting.
    pub fn overlapping_sections(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let navs: Vec<&Section> = self.nav_sections().collect();
        for (i, a) in navs.iter().enumerate() {
            for b in navs.iter().skip(i + 1) {
                if a.top < b.top + b.height && b.top < a.top + a.height {
                    out.push((a.id.clone(), b.id.clone()));
                }
            }
        }
        out
    }

    /// Built-in demo page used by `folio init` and as the fallback when no
    /// page file exists
    pub fn sample() -> Self {
        let mut page = PageModel {
            title: "Alex River".into(),
            tagline: "Systems programmer and occasional web tinkerer".into(),
            sections: vec![
                Section {
                    id: "home".into(),
                    title: "Hello".into(),
                    nav_label: Some("Home".into()),
                    top: 0,
                    height: 800,
                    body: vec![
                        "I build small, sharp tools and the occasional website.".into(),
                        "Scroll down to see what I have been working on.".into(),
                    ],
                },
                Section {
                    id: "about".into(),
                    title: "About".into(),
                    nav_label: Some("About".into()),
                    top: 800,
                    height: 800,
                    body: vec![
                        "A decade of Rust, C and shell, with detours into frontends.".into(),
                        "I care about latency, ergonomics and honest error messages.".into(),
                    ],
                },
                Section {
                    id: "projects".into(),
                    title: "Projects".into(),
                    nav_label: Some("Projects".into()),
                    top: 1600,
                    height: 1200,
                    body: vec!["A few things I am not embarrassed by.".into()],
                },
                Section {
                    id: "contact".into(),
                    title: "Contact".into(),
                    nav_label: Some("Contact".into()),
                    top: 2800,
                    height: 800,
                    body: vec!["Press c to open the contact form.".into()],
                },
            ],
            cards: vec![
                Card {
                    id: "card-hexdump".into(),
                    title: "hexd".into(),
                    category: "cli".into(),
                    blurb: "A colorized hexdump with structure annotations".into(),
                    top: 1750,
                    height: 60,
                    hidden: false,
                },
                Card {
                    id: "card-kv".into(),
                    title: "tinykv".into(),
                    category: "systems".into(),
                    blurb: "An embedded log-structured key-value store".into(),
                    top: 1750,
                    height: 60,
                    hidden: false,
                },
                Card {
                    id: "card-gallery".into(),
                    title: "gallery".into(),
                    category: "web".into(),
                    blurb: "A static photo gallery generator".into(),
                    top: 1830,
                    height: 60,
                    hidden: false,
                },
                Card {
                    id: "card-tracer".into(),
                    title: "tracer".into(),
                    category: "systems".into(),
                    blurb: "Syscall latency flamegraphs from eBPF samples".into(),
                    top: 1830,
                    height: 60,
                    hidden: false,
                },
                Card {
                    id: "card-notes".into(),
                    title: "notes".into(),
                    category: "web".into(),
                    blurb: "Markdown notes with instant full-text search".into(),
                    top: 1910,
                    height: 60,
                    hidden: false,
                },
                Card {
                    id: "card-pager".into(),
                    title: "pager".into(),
                    category: "cli".into(),
                    blurb: "A less clone that understands ANSI art".into(),
                    top: 1910,
                    height: 60,
                    hidden: false,
                },
            ],
        };
        // normalize cannot fail on the sample: sections are non-empty with
        // positive heights
        let _ = page.normalize();
        page
    }
}
