use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Builds the per-reading identifier of a drawn card. The slot keeps two
    /// draws of the same card within one timestamp tick apart.
    pub fn for_draw(name: &str, drawn_at: DateTime<Utc>, slot: usize) -> Self {
        Self(format!("{name}-{}-{slot}", drawn_at.timestamp_micros()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcanaKind {
    Major,
    Minor,
}

/// A card as delivered by the remote catalog, in the catalog's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCard {
    pub name: String,
    pub name_short: String,
    pub value: String,
    pub value_int: i64,
    pub meaning_up: String,
    pub meaning_rev: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub kind: ArcanaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<String>,
}

/// A catalog card with localized display text merged in.
///
/// Every localized field is non-empty; the merger substitutes generic text
/// when the term table has no entry for the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedCard {
    #[serde(flatten)]
    pub card: CatalogCard,
    pub localized_name: String,
    pub localized_meaning_up: String,
    pub localized_meaning_rev: String,
    pub localized_desc: String,
    pub localized_suit: String,
}

impl LocalizedCard {
    pub fn name(&self) -> &str {
        &self.card.name
    }

    pub fn short_code(&self) -> &str {
        &self.card.name_short
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadPosition {
    Past,
    Present,
    Future,
}

impl SpreadPosition {
    pub const ALL: [SpreadPosition; 3] = [Self::Past, Self::Present, Self::Future];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::Past => 0,
            Self::Present => 1,
            Self::Future => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Past => "Geçmiş",
            Self::Present => "Şimdi",
            Self::Future => "Gelecek",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Past => "Bu durumu etkileyen geçmiş deneyimleriniz",
            Self::Present => "Mevcut durumunuz ve şu anki enerjiniz",
            Self::Future => "Gelecekte sizi bekleyen fırsatlar",
        }
    }
}

/// A localized card captured at draw time with its orientation and slot fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub id: CardId,
    #[serde(flatten)]
    pub card: LocalizedCard,
    pub reversed: bool,
    pub position: SpreadPosition,
    pub image_url: String,
}

impl DrawnCard {
    /// Localized meaning for the card's orientation.
    pub fn active_meaning(&self) -> &str {
        if self.reversed {
            &self.card.localized_meaning_rev
        } else {
            &self.card.localized_meaning_up
        }
    }
}
