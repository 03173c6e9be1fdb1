//! Merges catalog cards with the localized term table.
//!
//! Lookups never fail: a card the table does not know gets the generic
//! default entry, and a suit the table does not know keeps its raw label.

use shared::domain::{CatalogCard, LocalizedCard};

mod terms;

pub use terms::{SUITS, TERMS};

/// Localized text for one card of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub name: &'static str,
    pub localized_name: &'static str,
    pub meaning_up: &'static str,
    pub meaning_rev: &'static str,
    pub desc: &'static str,
}

/// Entry used for cards missing from [`TERMS`].
pub const DEFAULT_TERM: Term = Term {
    name: "default",
    localized_name: "Bilinmeyen Kart",
    meaning_up: "pozitif enerji, yeni fırsatlar, gelişim",
    meaning_rev: "dikkat edilmesi gereken konular, iç gözlem",
    desc: "Bu kart size özel bir mesaj taşıyor. Sezgilerinizi dinleyin.",
};

/// Suit label for cards that carry no suit at all.
pub const GENERIC_SUIT: &str = "Mistik";

/// Exact-name lookup in the term table.
pub fn lookup(name: &str) -> Option<&'static Term> {
    TERMS.iter().find(|term| term.name == name)
}

/// Localized suit label: table entry, then the raw suit, then [`GENERIC_SUIT`].
pub fn suit_label(suit: Option<&str>) -> String {
    let Some(raw) = suit.map(str::trim).filter(|s| !s.is_empty()) else {
        return GENERIC_SUIT.to_string();
    };

    SUITS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(raw))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn localize(card: &CatalogCard) -> LocalizedCard {
    let term = lookup(&card.name).unwrap_or(&DEFAULT_TERM);

    LocalizedCard {
        card: card.clone(),
        localized_name: term.localized_name.to_string(),
        localized_meaning_up: term.meaning_up.to_string(),
        localized_meaning_rev: term.meaning_rev.to_string(),
        localized_desc: term.desc.to_string(),
        localized_suit: suit_label(card.suit.as_deref()),
    }
}

/// Localizes a whole catalog listing, keeping its order.
pub fn localize_all(cards: &[CatalogCard]) -> Vec<LocalizedCard> {
    cards.iter().map(localize).collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
