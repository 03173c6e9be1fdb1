use std::sync::Arc;

use super::*;
use shared::domain::{ArcanaKind, CardId, CatalogCard, LocalizedCard, SpreadPosition};

fn drawn(position: SpreadPosition, reversed: bool) -> DrawnCard {
    let card = CatalogCard {
        name: "Two of Cups".into(),
        name_short: "cu02".into(),
        value: "2".into(),
        value_int: 2,
        meaning_up: "union".into(),
        meaning_rev: "break".into(),
        desc: "desc".into(),
        kind: ArcanaKind::Minor,
        suit: Some("cups".into()),
    };
    DrawnCard {
        id: CardId(format!("Two of Cups-1-{}", position.index())),
        card: LocalizedCard {
            card,
            localized_name: "İki Kupa".into(),
            localized_meaning_up: "birlik, ortaklık".into(),
            localized_meaning_rev: "ayrılık, dengesizlik".into(),
            localized_desc: "İki Kupa ortaklığı temsil eder.".into(),
            localized_suit: "Kupalar".into(),
        },
        reversed,
        position,
        image_url: "http://img/cu02.jpg".into(),
    }
}

fn snapshot(status: DeckStatus) -> SessionSnapshot {
    SessionSnapshot {
        deck: Arc::from(Vec::new()),
        status,
        drawn_cards: Vec::new(),
        is_drawing: false,
        selected: None,
        current_card_index: 0,
    }
}

fn full_spread() -> SessionSnapshot {
    let mut snap = snapshot(DeckStatus::Ready);
    snap.drawn_cards = vec![
        drawn(SpreadPosition::Past, false),
        drawn(SpreadPosition::Present, true),
        drawn(SpreadPosition::Future, false),
    ];
    snap.current_card_index = 1;
    snap
}

#[test]
fn loading_and_failure_screens() {
    let loading = render(&snapshot(DeckStatus::Loading));
    assert!(loading.contains("Hazırlanıyor"));

    let failed = render(&snapshot(DeckStatus::Failed("bağlantı yok".into())));
    assert!(failed.contains("Bağlantı Sorunu"));
    assert!(failed.contains("bağlantı yok"));
    assert!(failed.contains("retry"));
}

#[test]
fn ready_deck_invites_a_draw() {
    let ready = render(&snapshot(DeckStatus::Ready));
    assert!(ready.contains("0 kart hazır"));
    assert!(ready.contains("'draw'"));
}

#[test]
fn progress_counter_while_revealing() {
    let mut snap = snapshot(DeckStatus::Ready);
    snap.is_drawing = true;
    snap.drawn_cards.push(drawn(SpreadPosition::Past, false));

    let screen = render(&snap);
    assert!(screen.contains("(1/3)"));
    assert!(!screen.contains("Genel Yorum"));
}

#[test]
fn card_line_marks_reversed_cards() {
    assert_eq!(
        card_line(&drawn(SpreadPosition::Present, true)),
        "Şimdi · İki Kupa (Ters) [Kupalar]"
    );
    assert_eq!(
        card_line(&drawn(SpreadPosition::Past, false)),
        "Geçmiş · İki Kupa [Kupalar]"
    );
}

#[test]
fn finished_spread_shows_focus_and_interpretation() {
    let screen = render(&full_spread());
    assert!(screen.contains("▶ 2. Şimdi"));
    assert!(screen.contains("  1. Geçmiş"));
    assert!(screen.contains("Genel Yorum"));
    assert!(screen.contains("birlik"));
    assert!(screen.contains("ayrılık"));
    assert!(!screen.contains("Kart Açıklaması"));
}

#[test]
fn selected_card_gets_detail_panel() {
    let mut snap = full_spread();
    snap.selected = Some(snap.drawn_cards[2].id.clone());

    let screen = render(&snap);
    assert!(screen.contains("Kart Açıklaması: İki Kupa ortaklığı temsil eder."));
    assert!(screen.contains("Düz Pozisyon Anlamı: birlik, ortaklık"));
    assert!(screen.contains("Ters Pozisyon Anlamı: ayrılık, dengesizlik"));
    assert!(screen.contains(SpreadPosition::Future.description()));
}
