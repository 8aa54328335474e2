//! Project card filtering
//!
//! One filter is active at a time; applying it sets each card's hidden
//! flag. Re-applying the same filter is a no-op.

use crate::page::Card;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every card
    #[default]
    All,
    /// Show only cards with a matching category tag
    Category(String),
}

impl Filter {
    pub fn label(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(name) => name,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => name == category,
        }
    }
}

/// Set the hidden flag on every card according to the filter
pub fn apply(filter: &Filter, cards: &mut [Card]) {
    for card in cards.iter_mut() {
        card.hidden = !filter.matches(&card.category);
    }
}
