use std::fmt::Write as _;

use reading_core::{draw::SPREAD_SIZE, DeckStatus, SessionSnapshot};
use shared::domain::DrawnCard;

const RULE: &str = "────────────────────────────────────────";

/// Full screen for one snapshot.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\n  Mistik Tarot · Üç Kart Açılımı\n{RULE}");

    match &snapshot.status {
        DeckStatus::Idle => {
            let _ = writeln!(out, "Deste henüz yüklenmedi. Yüklemek için 'retry' yazın.");
        }
        DeckStatus::Loading => {
            let _ = writeln!(out, "Mistik Tarot Kartları Hazırlanıyor...");
            let _ = writeln!(out, "Evrensel enerjiler toplanıyor");
        }
        DeckStatus::Failed(message) => {
            let _ = writeln!(out, "Bağlantı Sorunu");
            let _ = writeln!(out, "{message}");
            let _ = writeln!(out, "Tekrar denemek için 'retry' yazın.");
        }
        DeckStatus::Ready => render_reading(&mut out, snapshot),
    }
    out
}

fn render_reading(out: &mut String, snapshot: &SessionSnapshot) {
    if snapshot.drawn_cards.is_empty() && !snapshot.is_drawing {
        let _ = writeln!(out, "{} kart hazır", snapshot.deck.len());
        let _ = writeln!(
            out,
            "Geçmişinizi, şimdiki zamanınızı ve geleceğinizi keşfetmek için üç mistik tarot kartı çekin."
        );
        let _ = writeln!(out, "Başlamak için 'draw' yazın.");
        return;
    }

    if snapshot.is_drawing {
        let _ = writeln!(
            out,
            "Kartlar Çekiliyor... ({}/{SPREAD_SIZE})",
            snapshot.drawn_cards.len()
        );
    }

    for (index, card) in snapshot.drawn_cards.iter().enumerate() {
        let focus = if index == snapshot.current_card_index {
            '▶'
        } else {
            ' '
        };
        let _ = writeln!(out, "{focus} {}. {}", index + 1, card_line(card));
    }

    if let Some(card) = snapshot.selected_card() {
        render_details(out, card);
    }

    if let Some(text) = snapshot.interpretation() {
        let _ = writeln!(out, "\nGenel Yorum\n{text}");
    }
}

/// One-line summary of a drawn card: position, name, orientation, suit.
pub fn card_line(card: &DrawnCard) -> String {
    let orientation = if card.reversed { " (Ters)" } else { "" };
    format!(
        "{} · {}{orientation} [{}]",
        card.position.label(),
        card.card.localized_name,
        card.card.localized_suit
    )
}

fn render_details(out: &mut String, card: &DrawnCard) {
    let _ = writeln!(out, "\n{} · {}", card.card.localized_name, card.position.description());
    let _ = writeln!(out, "Kart Açıklaması: {}", card.card.localized_desc);
    let _ = writeln!(out, "Düz Pozisyon Anlamı: {}", card.card.localized_meaning_up);
    let _ = writeln!(out, "Ters Pozisyon Anlamı: {}", card.card.localized_meaning_rev);
    let _ = writeln!(out, "Görsel: {}", card.image_url);
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
