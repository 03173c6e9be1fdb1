use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{domain::CatalogCard, error::CatalogError};

/// Body of a successful catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub cards: Vec<CatalogCard>,
}

/// Validates a raw catalog body and extracts its cards in response order.
///
/// The body must be a JSON object whose `cards` field is a non-empty array of
/// card-shaped records.
pub fn parse_catalog_payload(body: &str) -> Result<Vec<CatalogCard>, CatalogError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| CatalogError::malformed(format!("body is not JSON: {err}")))?;

    let cards = match value.get("cards") {
        Some(Value::Array(cards)) => cards,
        Some(_) => return Err(CatalogError::malformed("`cards` is not an array")),
        None => return Err(CatalogError::malformed("missing `cards` field")),
    };

    if cards.is_empty() {
        return Err(CatalogError::malformed("`cards` is empty"));
    }

    cards
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            CatalogCard::deserialize(raw)
                .map_err(|err| CatalogError::malformed(format!("card #{index}: {err}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{domain::ArcanaKind, error::ErrorCode};

    fn card_json(name: &str, short: &str) -> Value {
        json!({
            "name": name,
            "name_short": short,
            "value": "1",
            "value_int": 1,
            "meaning_up": "up",
            "meaning_rev": "rev",
            "desc": "desc",
            "type": "major",
        })
    }

    #[test]
    fn keeps_response_order() {
        let body = json!({
            "nhits": 2,
            "cards": [card_json("The Fool", "ar00"), card_json("The Magician", "ar01")],
        })
        .to_string();

        let cards = parse_catalog_payload(&body).expect("valid payload");
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["The Fool", "The Magician"]);
        assert_eq!(cards[0].kind, ArcanaKind::Major);
    }

    #[test]
    fn rejects_missing_cards_field() {
        let err = parse_catalog_payload(r#"{"nhits": 0}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedPayload);
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn rejects_non_array_cards() {
        let err = parse_catalog_payload(r#"{"cards": {"name": "The Fool"}}"#).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn rejects_empty_list_and_non_json_bodies() {
        assert!(parse_catalog_payload(r#"{"cards": []}"#).is_err());
        assert!(parse_catalog_payload("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn rejects_records_that_are_not_card_shaped() {
        let body = json!({ "cards": [card_json("The Fool", "ar00"), { "name": "half" }] })
            .to_string();
        let err = parse_catalog_payload(&body).unwrap_err();
        assert!(err.to_string().contains("card #1"), "unexpected error: {err}");
    }
}
