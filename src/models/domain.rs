use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Gender values understood by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a free-form gender value, ignoring case.
    ///
    /// Only `male` and `female` are recognised; anything else (including the
    /// empty string) yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// The gender a seeker of this gender is matched against
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of the candidate pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub gender: Gender,
    #[serde(deserialize_with = "string_or_number")]
    pub whatsapp_no: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    pub relationship_status: String,
    #[serde(default)]
    pub profession: String,
    pub location: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub hobbies: String,
    #[serde(default)]
    pub languages: String,
}

/// Profile collected from the conversation for the person looking for a match.
///
/// Only `gender` and `location` drive selection; the rest is accepted so the
/// caller can forward everything it gathered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SeekerProfile {
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 128))]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 32))]
    pub gender: String,
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(length(max = 32))]
    pub age: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 64))]
    pub relationship_status: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 128))]
    pub profession: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 128))]
    pub location: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 256))]
    pub education: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 512))]
    pub hobbies: String,
    #[serde(default, deserialize_with = "string_or_null")]
    #[validate(length(max = 256))]
    pub languages: String,
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(length(max = 32))]
    pub whatsapp_no: String,
}

impl SeekerProfile {
    /// Convenience constructor for the two fields that matter for selection
    pub fn new(gender: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            gender: gender.into(),
            location: location.into(),
            ..Self::default()
        }
    }
}

/// Selected candidate plus the link used to contact them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub candidate: Candidate,
    pub contact_link: String,
}

/// Reads a string, treating `null` as the empty string
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts either a JSON/TOML string or a number and keeps it as text.
/// `null` becomes the empty string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_ignores_case() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("MALE"), Some(Gender::Male));
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
    }

    #[test]
    fn test_gender_parse_rejects_unknown() {
        assert_eq!(Gender::parse("other"), None);
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse(" male"), None);
    }

    #[test]
    fn test_gender_opposite() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite(), Gender::Male);
    }

    #[test]
    fn test_seeker_accepts_numeric_fields() {
        let seeker: SeekerProfile = serde_json::from_value(serde_json::json!({
            "name": "Ahmed",
            "gender": "male",
            "age": 27,
            "location": "Lahore",
            "whatsapp_no": 923001234567u64
        }))
        .unwrap();

        assert_eq!(seeker.age, "27");
        assert_eq!(seeker.whatsapp_no, "923001234567");
        assert_eq!(seeker.profession, "");
    }

    #[test]
    fn test_seeker_missing_fields_default_to_empty() {
        let seeker: SeekerProfile = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(seeker, SeekerProfile::default());
    }

    #[test]
    fn test_seeker_null_age_is_empty() {
        let seeker: SeekerProfile =
            serde_json::from_value(serde_json::json!({ "gender": "male", "age": null })).unwrap();
        assert_eq!(seeker.age, "");
    }

    #[test]
    fn test_seeker_null_text_fields_are_empty() {
        let seeker: SeekerProfile = serde_json::from_value(serde_json::json!({
            "name": null,
            "gender": null,
            "location": null,
            "hobbies": null,
            "languages": "Urdu"
        }))
        .unwrap();

        assert_eq!(seeker.name, "");
        assert_eq!(seeker.gender, "");
        assert_eq!(seeker.location, "");
        assert_eq!(seeker.hobbies, "");
        assert_eq!(seeker.languages, "Urdu");
    }

    #[test]
    fn test_seeker_validation_bounds_length() {
        let mut seeker = SeekerProfile::new("male", "Lahore");
        assert!(seeker.validate().is_ok());

        seeker.location = "x".repeat(500);
        assert!(seeker.validate().is_err());
    }

    #[test]
    fn test_candidate_serializes_lowercase_gender() {
        let candidate = Candidate {
            name: "Sara".to_string(),
            gender: Gender::Female,
            whatsapp_no: "923111111112".to_string(),
            age: "24".to_string(),
            relationship_status: "single".to_string(),
            profession: "Graphic Designer".to_string(),
            location: "Lahore".to_string(),
            education: "Bachelor of Fine Arts".to_string(),
            hobbies: "Painting, Music".to_string(),
            languages: "English, Urdu".to_string(),
        };

        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["gender"], "female");
        assert_eq!(value["whatsapp_no"], "923111111112");
    }
}
