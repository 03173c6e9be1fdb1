//! Narrative summary of a completed spread.
//!
//! Each drawn card contributes one theme, the first keyword of its active
//! meaning. The themes are slotted Past, Present, Future into one of a fixed
//! set of templates. Template choice is rerolled on every call.

use rand::Rng;
use shared::domain::DrawnCard;

use crate::draw::SPREAD_SIZE;

pub const TEMPLATES: [&str; 6] = [
    "Kartlarınız, geçmişte yaşadığınız {past} deneyiminden, şu anki {present} durumunuza ve gelecekte sizi bekleyen {future} enerjisine doğru bir yolculuk gösteriyor.",
    "Bu açılım, {past} olan geçmişinizden {present} olan şimdiki zamanınıza, oradan da {future} olan geleceğinize doğru bir dönüşüm sürecini işaret ediyor.",
    "Ruhsal yolculuğunuzda geçmişteki {past} deneyimi, bugünkü {present} durumunuzu şekillendirmiş ve gelecekte {future} bir dönem sizi bekliyor.",
    "Evrensel enerjiler size {past} geçmişinizden {present} bugününüze, {future} geleceğinize uzanan bir hikaye anlatıyor.",
    "Mistik kartlar {past} olan dününüzden {present} olan bugününüze, {future} olan yarınınıza doğru bir enerji akışı gösteriyor.",
    "Tarot'un bilgeliği {past} geçmişinizin {present} şimdiki zamanınızı nasıl etkilediğini ve {future} geleceğinizi nasıl şekillendireceğini açıklıyor.",
];

/// First comma-separated keyword of a meaning, trimmed and lowercased.
pub fn theme_token(meaning: &str) -> String {
    meaning
        .split(',')
        .next()
        .unwrap_or(meaning)
        .trim()
        .to_lowercase()
}

/// Themes in spread order, or `None` unless exactly three cards are given.
pub fn spread_themes(cards: &[DrawnCard]) -> Option<[String; SPREAD_SIZE]> {
    let [past, present, future] = cards else {
        return None;
    };
    Some([past, present, future].map(|card| theme_token(card.active_meaning())))
}

pub fn interpret_with(themes: &[String; SPREAD_SIZE], template_index: usize) -> String {
    let [past, present, future] = themes;
    TEMPLATES[template_index % TEMPLATES.len()]
        .replace("{past}", past)
        .replace("{present}", present)
        .replace("{future}", future)
}

pub fn interpret<R: Rng>(cards: &[DrawnCard], rng: &mut R) -> Option<String> {
    let themes = spread_themes(cards)?;
    Some(interpret_with(&themes, rng.random_range(0..TEMPLATES.len())))
}

#[cfg(test)]
#[path = "tests/interpretation_tests.rs"]
mod tests;
