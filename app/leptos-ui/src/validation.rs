//! Form-layer field checks.
//!
//! The domain services pass payloads through unchanged, so these checks are
//! the only gate between the inputs and the wire: required fields, numeric
//! bounds and the basic email pattern. Values arrive as the raw input
//! strings; error values are i18n keys rendered next to the fields.

pub const MIN_DUREE: f64 = 0.5;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceFormErrors {
    pub titre: Option<&'static str>,
    pub date: Option<&'static str>,
    pub duree: Option<&'static str>,
    pub nombre_inscrits: Option<&'static str>,
    pub score: Option<&'static str>,
    pub keynote: Option<&'static str>,
}

impl ConferenceFormErrors {
    pub fn is_empty(&self) -> bool {
        self.titre.is_none()
            && self.date.is_none()
            && self.duree.is_none()
            && self.nombre_inscrits.is_none()
            && self.score.is_none()
            && self.keynote.is_none()
    }
}

pub fn validate_conference(
    titre: &str,
    date: &str,
    duree: &str,
    nombre_inscrits: &str,
    score: &str,
    keynote_id: Option<i64>,
) -> ConferenceFormErrors {
    ConferenceFormErrors {
        titre: required(titre),
        date: required(date),
        duree: required(duree).or_else(|| match duree.trim().parse::<f64>() {
            Ok(v) if v >= MIN_DUREE => None,
            _ => Some("error-duree-min"),
        }),
        nombre_inscrits: required(nombre_inscrits).or_else(|| {
            match nombre_inscrits.trim().parse::<i64>() {
                Ok(v) if v >= 0 => None,
                _ => Some("error-inscrits-min"),
            }
        }),
        score: required(score).or_else(|| match score.trim().parse::<f64>() {
            Ok(v) if (MIN_SCORE..=MAX_SCORE).contains(&v) => None,
            _ => Some("error-score-range"),
        }),
        keynote: match keynote_id {
            Some(_) => None,
            None => Some("error-keynote-required"),
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeynoteFormErrors {
    pub nom: Option<&'static str>,
    pub prenom: Option<&'static str>,
    pub email: Option<&'static str>,
    pub fonction: Option<&'static str>,
}

impl KeynoteFormErrors {
    pub fn is_empty(&self) -> bool {
        self.nom.is_none()
            && self.prenom.is_none()
            && self.email.is_none()
            && self.fonction.is_none()
    }
}

pub fn validate_keynote(
    nom: &str,
    prenom: &str,
    email: &str,
    fonction: &str,
) -> KeynoteFormErrors {
    KeynoteFormErrors {
        nom: required(nom),
        prenom: required(prenom),
        email: required(email).or_else(|| {
            if is_valid_email(email.trim()) {
                None
            } else {
                Some("error-email-invalid")
            }
        }),
        fonction: required(fonction),
    }
}

fn required(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("error-required")
    } else {
        None
    }
}

/// Basic `local@domain.tld` shape, nothing more.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_conference_input_produces_no_errors() {
        let errors =
            validate_conference("Systems Day", "2025-03-01T09:00", "2", "50", "4.2", Some(7));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_required_fields_are_reported() {
        let errors = validate_conference("", "", "2", "50", "4.2", Some(7));
        assert_eq!(errors.titre, Some("error-required"));
        assert_eq!(errors.date, Some("error-required"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn score_outside_zero_to_five_is_rejected() {
        let errors = validate_conference("T", "2025-03-01T09:00", "2", "50", "5.1", Some(7));
        assert_eq!(errors.score, Some("error-score-range"));
        let errors = validate_conference("T", "2025-03-01T09:00", "2", "50", "-0.1", Some(7));
        assert_eq!(errors.score, Some("error-score-range"));
        let errors = validate_conference("T", "2025-03-01T09:00", "2", "50", "5.0", Some(7));
        assert!(errors.score.is_none());
    }

    #[test]
    fn duree_below_half_hour_is_rejected() {
        let errors = validate_conference("T", "2025-03-01T09:00", "0.4", "50", "4", Some(7));
        assert_eq!(errors.duree, Some("error-duree-min"));
        let errors = validate_conference("T", "2025-03-01T09:00", "0.5", "50", "4", Some(7));
        assert!(errors.duree.is_none());
    }

    #[test]
    fn negative_or_garbled_registrant_count_is_rejected() {
        let errors = validate_conference("T", "2025-03-01T09:00", "2", "-3", "4", Some(7));
        assert_eq!(errors.nombre_inscrits, Some("error-inscrits-min"));
        let errors = validate_conference("T", "2025-03-01T09:00", "2", "beaucoup", "4", Some(7));
        assert_eq!(errors.nombre_inscrits, Some("error-inscrits-min"));
    }

    #[test]
    fn missing_keynote_selection_is_rejected() {
        let errors = validate_conference("T", "2025-03-01T09:00", "2", "50", "4", None);
        assert_eq!(errors.keynote, Some("error-keynote-required"));
    }

    #[test]
    fn email_pattern_is_basic_but_enforced() {
        assert!(is_valid_email("ada.lovelace@example.org"));
        assert!(!is_valid_email("ada.lovelace"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada lovelace@example.org"));
        assert!(!is_valid_email("ada@@example.org"));
    }

    #[test]
    fn keynote_form_requires_every_field() {
        let errors = validate_keynote("", "Marie", "marie@curie.fr", "");
        assert_eq!(errors.nom, Some("error-required"));
        assert!(errors.prenom.is_none());
        assert!(errors.email.is_none());
        assert_eq!(errors.fonction, Some("error-required"));

        let errors = validate_keynote("Curie", "Marie", "pas-un-email", "Chercheuse");
        assert_eq!(errors.email, Some("error-email-invalid"));
    }
}
