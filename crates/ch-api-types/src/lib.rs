//! Shared wire types for the ConferenceHub front-end.
//!
//! These structs mirror the JSON emitted by the conference and keynote
//! backend services behind the gateway. Field names on the wire are the
//! backend's and must stay verbatim (`titre`, `duree`, `nombreInscrits`,
//! `keynoteId`, `commentaire`, ...).

use serde::{Deserialize, Serialize};

// ── Enumerations ──

/// Conference category. The backend serializes `Academic` with an upper-case
/// initial but `commercial` with a lower-case one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConferenceType {
    #[default]
    Academic,
    #[serde(rename = "commercial")]
    Commercial,
}

impl ConferenceType {
    pub fn label(&self) -> &'static str {
        match self {
            ConferenceType::Academic => "Academic",
            ConferenceType::Commercial => "Commercial",
        }
    }

    /// Wire value, as accepted by the backend.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ConferenceType::Academic => "Academic",
            ConferenceType::Commercial => "commercial",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "commercial" => ConferenceType::Commercial,
            _ => ConferenceType::Academic,
        }
    }

    pub fn all() -> &'static [ConferenceType] {
        &[ConferenceType::Academic, ConferenceType::Commercial]
    }
}

// ── Response types (matching backend JSON) ──

/// A timestamped free-text comment owned by exactly one conference.
/// Created and deleted only through the conference's review sub-resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: i64,
    /// ISO-8601 timestamp assigned by the client at creation time.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub commentaire: String,
}

/// A keynote speaker record, referenced by conferences via `keynoteId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keynote {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub fonction: String,
}

impl Keynote {
    /// "Prenom Nom" as displayed throughout the UI.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

/// A conference as returned by the backend: reviews in creation order and,
/// when the relation resolves, the expanded keynote object alongside its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub titre: String,
    #[serde(default, rename = "type")]
    pub conference_type: ConferenceType,
    /// ISO-8601 date/time. May lack seconds and zone (datetime-local input).
    #[serde(default)]
    pub date: String,
    /// Duration in hours.
    #[serde(default)]
    pub duree: f64,
    #[serde(default, rename = "nombreInscrits")]
    pub nombre_inscrits: i64,
    /// 0 to 5.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default, rename = "keynoteId")]
    pub keynote_id: i64,
    #[serde(default)]
    pub keynote: Option<Keynote>,
}

// ── Request types ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub date: String,
    pub commentaire: String,
}

/// Create/full-update payload for a conference. The keynote travels by id
/// only; the backend expands it on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceRequest {
    pub titre: String,
    #[serde(rename = "type")]
    pub conference_type: ConferenceType,
    pub date: String,
    pub duree: f64,
    #[serde(rename = "nombreInscrits")]
    pub nombre_inscrits: i64,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewRequest>>,
    #[serde(rename = "keynoteId")]
    pub keynote_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeynoteRequest {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub fonction: String,
}

// ── Partial-update payloads ──
//
// A PATCH body must carry only the supplied fields, so every member is
// optional and skipped when absent.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConferencePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub conference_type: Option<ConferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duree: Option<f64>,
    #[serde(
        default,
        rename = "nombreInscrits",
        skip_serializing_if = "Option::is_none"
    )]
    pub nombre_inscrits: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, rename = "keynoteId", skip_serializing_if = "Option::is_none")]
    pub keynote_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeynotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonction: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conference_deserializes_backend_shape() {
        let payload = json!({
            "id": 12,
            "titre": "Systems Day",
            "type": "Academic",
            "date": "2025-03-01T09:00",
            "duree": 2.0,
            "nombreInscrits": 50,
            "score": 4.2,
            "reviews": [
                { "id": 1, "date": "2025-03-01T12:00:00Z", "commentaire": "Solide" }
            ],
            "keynoteId": 7,
            "keynote": {
                "id": 7,
                "nom": "Curie",
                "prenom": "Marie",
                "email": "marie.curie@example.org",
                "fonction": "Directrice de recherche"
            }
        });

        let conf: Conference = serde_json::from_value(payload).unwrap();
        assert_eq!(conf.id, 12);
        assert_eq!(conf.titre, "Systems Day");
        assert_eq!(conf.conference_type, ConferenceType::Academic);
        assert_eq!(conf.nombre_inscrits, 50);
        assert_eq!(conf.keynote_id, 7);
        assert_eq!(conf.reviews.len(), 1);
        assert_eq!(conf.reviews[0].commentaire, "Solide");
        let keynote = conf.keynote.unwrap();
        assert_eq!(keynote.full_name(), "Marie Curie");
    }

    #[test]
    fn conference_without_reviews_or_keynote_still_parses() {
        let payload = json!({
            "id": 3,
            "titre": "DevDay",
            "type": "commercial",
            "date": "2025-06-10T14:00",
            "duree": 1.5,
            "nombreInscrits": 120,
            "score": 3.9,
            "keynoteId": 2
        });

        let conf: Conference = serde_json::from_value(payload).unwrap();
        assert_eq!(conf.conference_type, ConferenceType::Commercial);
        assert!(conf.reviews.is_empty());
        assert!(conf.keynote.is_none());
    }

    #[test]
    fn conference_type_casing_is_asymmetric_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&ConferenceType::Academic).unwrap(),
            "\"Academic\""
        );
        assert_eq!(
            serde_json::to_string(&ConferenceType::Commercial).unwrap(),
            "\"commercial\""
        );
        assert_eq!(ConferenceType::from_wire("commercial").as_wire(), "commercial");
    }

    #[test]
    fn conference_request_uses_wire_names_and_skips_empty_reviews() {
        let req = ConferenceRequest {
            titre: "Systems Day".into(),
            conference_type: ConferenceType::Academic,
            date: "2025-03-01T09:00".into(),
            duree: 2.0,
            nombre_inscrits: 50,
            score: 4.2,
            reviews: None,
            keynote_id: 7,
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "titre": "Systems Day",
                "type": "Academic",
                "date": "2025-03-01T09:00",
                "duree": 2.0,
                "nombreInscrits": 50,
                "score": 4.2,
                "keynoteId": 7
            })
        );
    }

    #[test]
    fn patch_body_carries_only_supplied_fields() {
        let patch = ConferencePatch {
            score: Some(4.5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"score":4.5}"#
        );

        let patch = KeynotePatch {
            email: Some("ada@example.org".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"email":"ada@example.org"}"#
        );
    }

    #[test]
    fn review_batch_serializes_as_bare_array() {
        let batch = vec![ReviewRequest {
            date: "2025-03-01T12:00:00Z".into(),
            commentaire: "Très clair".into(),
        }];
        assert_eq!(
            serde_json::to_string(&batch).unwrap(),
            r#"[{"date":"2025-03-01T12:00:00Z","commentaire":"Très clair"}]"#
        );
    }
}
