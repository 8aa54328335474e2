use std::path::PathBuf;
use std::time::Instant;

use tracing::warn;

use folio_core::filter::{self, Filter};
use folio_core::form::{ContactForm, Field};
use folio_core::nav::SectionTracker;
use folio_core::reveal::{RevealObserver, StaggerScheduler};
use folio_core::{EngineConfig, PageModel, Preferences, WatchedElement};

use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Palette;

/// Application state
pub struct App {
    /// Engine configuration
    pub config: EngineConfig,
    /// The page being displayed (cards carry runtime filter state)
    pub page: PageModel,
    /// Reveal state per element
    pub watched: Vec<WatchedElement>,
    observer: RevealObserver,
    stagger: StaggerScheduler,
    tracker: SectionTracker,
    /// Persisted preferences, written through on theme toggle
    pub prefs: Preferences,
    prefs_path: PathBuf,
    /// Active color palette, always in sync with prefs.theme
    pub palette: Palette,
    /// Viewport scroll animation
    pub animator: ScrollAnimator,
    /// Page rows visible on screen
    pub viewport_height: u16,
    /// Hamburger menu state
    pub menu_open: bool,
    /// Available filters: All plus one per card category
    pub filters: Vec<Filter>,
    /// Index of the active filter (exclusive selection)
    pub active_filter: usize,
    /// Contact form state machine
    pub form: ContactForm,
    /// Focused form field; None while browsing the page
    pub form_focus: Option<Field>,
    /// Id of the section currently in view, if any
    pub active_section: Option<String>,
    /// Navbar scrolled-style flag
    pub navbar_scrolled: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: EngineConfig,
        page: PageModel,
        prefs: Preferences,
        prefs_path: PathBuf,
    ) -> Self {
        let watched = page.watched_elements();
        let observer = RevealObserver::new(&config.reveal, &watched);
        let stagger = StaggerScheduler::new(&config.reveal);
        let tracker = SectionTracker::new(&config.nav);
        let form = ContactForm::new(&config.form);
        let animator = ScrollAnimator::new(&config.ui);
        let palette = Palette::for_preference(prefs.theme);

        let mut filters = vec![Filter::All];
        filters.extend(page.categories().into_iter().map(Filter::Category));

        Self {
            config,
            page,
            watched,
            observer,
            stagger,
            tracker,
            prefs,
            prefs_path,
            palette,
            animator,
            viewport_height: 0,
            menu_open: false,
            filters,
            active_filter: 0,
            form,
            form_focus: None,
            active_section: None,
            navbar_scrolled: false,
            pending_key: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Viewport height in page units
    pub fn viewport_units(&self) -> u32 {
        self.viewport_height as u32 * self.config.ui.units_per_row
    }

    /// Largest legal scroll offset for the current viewport
    pub fn max_scroll(&self) -> u32 {
        self.page.total_height().saturating_sub(self.viewport_units())
    }

    /// Per-tick pipeline: advance the animation, observe the new viewport,
    /// stagger the fresh batch, apply due reveals, then recompute the
    /// scroll-derived flags
    pub fn on_tick(&mut self, now: Instant) {
        let scroll = self.animator.update(self.max_scroll(), now);

        let viewport_units = self.viewport_units();
        let batch = self.observer.observe(scroll, viewport_units);
        if !batch.is_empty() {
            self.stagger.schedule(&batch, now);
        }
        for id in self.stagger.poll(now) {
            if let Some(el) = self.watched.iter_mut().find(|e| e.id == id) {
                el.mark_revealed();
            }
        }

        self.active_section = self
            .tracker
            .active_section(scroll, &self.page.sections)
            .map(|s| s.id.clone());
        self.navbar_scrolled = self.tracker.navbar_scrolled(scroll);

        self.form.tick(now);
    }

    /// Whether an element has been revealed yet
    pub fn is_revealed(&self, id: &str) -> bool {
        self.watched
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.is_revealed())
            .unwrap_or(true)
    }

    pub fn current_filter(&self) -> &Filter {
        &self.filters[self.active_filter]
    }

    /// Apply an input action to the state
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::ScrollDown => self.scroll_lines(1),
            Action::ScrollUp => self.scroll_lines(-1),
            Action::HalfPageDown => self.animator.scroll_by(self.half_page()),
            Action::HalfPageUp => self.animator.scroll_by(-self.half_page()),
            Action::PageDown => self.animator.scroll_by(self.viewport_units() as i64),
            Action::PageUp => self.animator.scroll_by(-(self.viewport_units() as i64)),
            Action::JumpToTop => self.animator.scroll_to(0, self.max_scroll(), now),
            Action::JumpToBottom => {
                let max = self.max_scroll();
                self.animator.scroll_to(max, max, now);
            }
            Action::PendingG => self.pending_key = Some('g'),
            Action::JumpToSection(n) => self.jump_to_nav(n, now),

            Action::ToggleMenu => self.menu_open = !self.menu_open,
            Action::ToggleTheme => self.toggle_theme(),
            Action::NextFilter => self.cycle_filter(1),
            Action::PrevFilter => self.cycle_filter(-1),

            Action::OpenForm => {
                self.form_focus = Some(Field::Name);
            }
            Action::NextField => {
                if let Some(field) = self.form_focus {
                    self.form_focus = Some(field.next());
                }
            }
            Action::PrevField => {
                if let Some(field) = self.form_focus {
                    self.form_focus = Some(field.prev());
                }
            }
            Action::Submit => {
                if self.form.submit(now) {
                    self.form_focus = Some(Field::Name);
                }
            }
            Action::InputChar(c) => {
                if let Some(field) = self.form_focus {
                    self.form.input.field_mut(field).push(c);
                    self.form.clear_error(field);
                }
            }
            Action::Backspace => {
                if let Some(field) = self.form_focus {
                    self.form.input.field_mut(field).pop();
                    self.form.clear_error(field);
                }
            }
            Action::CloseOverlay => {
                if self.form_focus.is_some() {
                    self.form_focus = None;
                } else if self.menu_open {
                    self.menu_open = false;
                } else {
                    self.status_message = None;
                }
            }

            Action::None => {}
        }

        if !matches!(action, Action::PendingG) {
            self.pending_key = None;
        }
    }

    fn scroll_lines(&mut self, direction: i64) {
        let step = self.config.ui.scroll_lines as i64 * self.config.ui.units_per_row as i64;
        self.animator.scroll_by(direction * step);
    }

    fn half_page(&self) -> i64 {
        (self.viewport_units() / 2).max(1) as i64
    }

    /// Scroll to the nth navigation section (1-based, navbar order) and
    /// close the menu, mirroring the page's link behavior
    fn jump_to_nav(&mut self, n: usize, now: Instant) {
        let target = self
            .page
            .nav_sections()
            .nth(n.saturating_sub(1))
            .map(|s| s.top);
        if let Some(top) = target {
            self.animator.scroll_to(top, self.max_scroll(), now);
        }
        self.menu_open = false;
    }

    /// Flip the theme, persist it, and swap the palette. On a write failure
    /// the UI still flips; the file will catch up on the next toggle.
    fn toggle_theme(&mut self) {
        match self.prefs.toggle_theme(&self.prefs_path) {
            Ok(theme) => {
                self.palette = Palette::for_preference(theme);
            }
            Err(e) => {
                warn!(error = %e, "failed to persist theme preference");
                self.palette = Palette::for_preference(self.prefs.theme);
                self.status_message = Some("Could not save theme preference".into());
            }
        }
    }

    /// Move the exclusive filter selection and re-apply hidden flags
    fn cycle_filter(&mut self, step: i64) {
        let len = self.filters.len() as i64;
        self.active_filter = ((self.active_filter as i64 + step).rem_euclid(len)) as usize;
        filter::apply(&self.filters[self.active_filter], &mut self.page.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn temp_prefs(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-app-{}-{}.toml", tag, std::process::id()))
    }

    fn app(tag: &str) -> App {
        let mut app = App::new(
            EngineConfig::default(),
            PageModel::sample(),
            Preferences::default(),
            temp_prefs(tag),
        );
        app.viewport_height = 40;
        app
    }

    #[test]
    fn test_tick_reveals_visible_elements_once() {
        let mut app = app("reveal");
        let now = Instant::now();
        app.on_tick(now);

        // The hero section (top 0) is in the initial viewport and Generic,
        // so it reveals with zero delay
        assert!(app.is_revealed("home"));

        // Elements far below the fold stay unrevealed
        assert!(!app.is_revealed("contact"));
    }

    #[test]
    fn test_cards_reveal_staggered() {
        let mut app = app("stagger");
        let now = Instant::now();

        // Land the viewport on the card grid: zone covers the projects
        // heading and the first two card rows
        app.animator.set(1700, app.max_scroll());
        app.on_tick(now);

        // The section heading is Generic and reveals immediately; cards in
        // the same batch wait out their stagger delay
        assert!(app.is_revealed("projects"));
        assert!(!app.is_revealed("card-hexdump"));

        // Well past (K-1) increments the whole batch has landed
        app.on_tick(now + Duration::from_millis(400));
        assert!(app.is_revealed("card-hexdump"));
        assert!(app.is_revealed("card-gallery"));
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut app = app("active");
        let now = Instant::now();

        app.on_tick(now);
        assert_eq!(app.active_section.as_deref(), Some("home"));

        app.animator.set(1700, app.max_scroll());
        app.on_tick(now);
        // effective 1820 is inside projects (1600..2800)
        assert_eq!(app.active_section.as_deref(), Some("projects"));
    }

    #[test]
    fn test_navbar_flag_threshold() {
        let mut app = app("navbar");
        let now = Instant::now();

        app.animator.set(50, app.max_scroll());
        app.on_tick(now);
        assert!(!app.navbar_scrolled);

        app.animator.set(51, app.max_scroll());
        app.on_tick(now);
        assert!(app.navbar_scrolled);
    }

    #[test]
    fn test_filter_cycle_applies_hidden_flags() {
        let mut app = app("filter");
        assert_eq!(app.filters.len(), 4); // all + cli/systems/web

        app.apply(Action::NextFilter, Instant::now());
        assert_eq!(app.current_filter().label(), "cli");
        assert!(app.page.cards.iter().any(|c| c.hidden));

        // Cycling back to All unhides everything
        app.apply(Action::PrevFilter, Instant::now());
        assert!(app.page.cards.iter().all(|c| !c.hidden));
    }

    #[test]
    fn test_jump_to_section_closes_menu() {
        let mut app = app("menu");
        app.menu_open = true;
        let now = Instant::now();

        app.apply(Action::JumpToSection(3), now);
        assert!(!app.menu_open);
        assert_eq!(app.animator.target(), 1600); // projects.top
    }

    #[test]
    fn test_theme_toggle_swaps_palette_and_persists() {
        let path = temp_prefs("theme");
        let _ = std::fs::remove_file(&path);
        let mut app = App::new(
            EngineConfig::default(),
            PageModel::sample(),
            Preferences::default(),
            path.clone(),
        );

        let dark_bg = app.palette.bg;
        app.apply(Action::ToggleTheme, Instant::now());
        assert_ne!(app.palette.bg, dark_bg);
        assert_eq!(
            Preferences::load_from(&path).unwrap().theme,
            folio_core::ThemePreference::Light
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_form_typing_and_submit() {
        let mut app = app("form");
        let now = Instant::now();

        app.apply(Action::OpenForm, now);
        for c in "Jo".chars() {
            app.apply(Action::InputChar(c), now);
        }
        app.apply(Action::NextField, now);
        for c in "jo@x.com".chars() {
            app.apply(Action::InputChar(c), now);
        }
        app.apply(Action::NextField, now);
        for c in "Hello there!!".chars() {
            app.apply(Action::InputChar(c), now);
        }

        app.apply(Action::Submit, now);
        assert!(app.form.success_visible());
        assert!(app.form.input.name.is_empty());

        app.on_tick(now + Duration::from_millis(4000));
        assert!(!app.form.success_visible());
    }

    #[test]
    fn test_close_overlay_priority() {
        let mut app = app("overlay");
        let now = Instant::now();
        app.menu_open = true;
        app.apply(Action::OpenForm, now);

        // Form closes first, then the menu
        app.apply(Action::CloseOverlay, now);
        assert!(app.form_focus.is_none());
        assert!(app.menu_open);
        app.apply(Action::CloseOverlay, now);
        assert!(!app.menu_open);
    }
}
