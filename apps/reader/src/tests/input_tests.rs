use std::sync::Arc;

use super::*;
use reading_core::DeckStatus;
use shared::domain::{ArcanaKind, CardId, CatalogCard, DrawnCard, LocalizedCard, SpreadPosition};

fn drawn(position: SpreadPosition) -> DrawnCard {
    let card = CatalogCard {
        name: "The Star".into(),
        name_short: "ar17".into(),
        value: "17".into(),
        value_int: 17,
        meaning_up: "hope".into(),
        meaning_rev: "despair".into(),
        desc: "desc".into(),
        kind: ArcanaKind::Major,
        suit: None,
    };
    DrawnCard {
        id: CardId(format!("The Star-1-{}", position.index())),
        card: LocalizedCard {
            card,
            localized_name: "Yıldız".into(),
            localized_meaning_up: "umut".into(),
            localized_meaning_rev: "umutsuzluk".into(),
            localized_desc: "Yıldız umut temsil eder.".into(),
            localized_suit: "Mistik".into(),
        },
        reversed: false,
        position,
        image_url: "http://img/ar17.jpg".into(),
    }
}

fn snapshot(drawn_cards: Vec<DrawnCard>) -> SessionSnapshot {
    SessionSnapshot {
        deck: Arc::from(Vec::new()),
        status: DeckStatus::Ready,
        drawn_cards,
        is_drawing: false,
        selected: None,
        current_card_index: 0,
    }
}

#[test]
fn parses_plain_commands_and_aliases() {
    assert_eq!(parse_line("draw"), Ok(Some(Action::Draw)));
    assert_eq!(parse_line("  D  "), Ok(Some(Action::Draw)));
    assert_eq!(parse_line("reset"), Ok(Some(Action::Reset)));
    assert_eq!(parse_line("next"), Ok(Some(Action::Next)));
    assert_eq!(parse_line("p"), Ok(Some(Action::Prev)));
    assert_eq!(parse_line("retry"), Ok(Some(Action::Retry)));
    assert_eq!(parse_line("quit"), Ok(Some(Action::Quit)));
    assert_eq!(parse_line("   "), Ok(None));
}

#[test]
fn parses_card_slots() {
    assert_eq!(parse_line("go 3"), Ok(Some(Action::GoTo(3))));
    assert_eq!(parse_line("select 2"), Ok(Some(Action::Select(Some(2)))));
    assert_eq!(parse_line("select"), Ok(Some(Action::Select(None))));
    assert_eq!(
        parse_line("go"),
        Err(InputError::MissingSlot { command: "go" })
    );
    assert_eq!(parse_line("go 0"), Err(InputError::BadSlot("0".into())));
    assert_eq!(parse_line("go two"), Err(InputError::BadSlot("two".into())));
    assert_eq!(
        parse_line("shuffle"),
        Err(InputError::Unknown("shuffle".into()))
    );
}

#[test]
fn navigation_maps_to_swipes_and_zero_based_index() {
    let snap = snapshot(Vec::new());
    assert_eq!(
        to_command(Action::Next, &snap),
        Ok(Some(SessionCommand::Swipe(SwipeDirection::Left)))
    );
    assert_eq!(
        to_command(Action::Prev, &snap),
        Ok(Some(SessionCommand::Swipe(SwipeDirection::Right)))
    );
    assert_eq!(
        to_command(Action::GoTo(5), &snap),
        Ok(Some(SessionCommand::GoToCard(4)))
    );
    assert_eq!(
        to_command(Action::Retry, &snap),
        Ok(Some(SessionCommand::LoadDeck))
    );
    assert_eq!(to_command(Action::Quit, &snap), Ok(None));
}

#[test]
fn select_resolves_slot_to_drawn_card_id() {
    let snap = snapshot(SpreadPosition::ALL.map(drawn).to_vec());
    assert_eq!(
        to_command(Action::Select(Some(2)), &snap),
        Ok(Some(SessionCommand::SelectCard(Some(
            snap.drawn_cards[1].id.clone()
        ))))
    );
    assert_eq!(
        to_command(Action::Select(None), &snap),
        Ok(Some(SessionCommand::SelectCard(None)))
    );

    let empty = snapshot(Vec::new());
    assert_eq!(
        to_command(Action::Select(Some(1)), &empty),
        Err(InputError::EmptySlot(1))
    );
}
