use serde::{Deserialize, Serialize};

/// The catalog exactly as it arrives on the wire.
///
/// All three collections are required. A document missing one of them is
/// treated as malformed rather than silently empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    pub countries: Vec<CountryRecord>,
    pub temples: Vec<DestinationRecord>,
    pub beaches: Vec<DestinationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<DestinationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Catalog ids show up both as numbers and as strings in the wild.
/// Any JSON number is accepted, negative and fractional included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Decode a catalog document from raw bytes
pub fn parse_document(bytes: &[u8]) -> crate::Result<CatalogDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "countries": [
                {"id": 1, "name": "Japan", "cities": [
                    {"id": 11, "name": "Tokyo, Japan", "description": "Neon", "imageUrl": "tokyo.jpg", "timeZone": "Asia/Tokyo"}
                ]}
            ],
            "temples": [
                {"id": "t-1", "name": "Angkor Wat, Cambodia", "description": "Ruins", "imageUrl": "angkor.jpg"}
            ],
            "beaches": []
        }"#;

        let doc = parse_document(json.as_bytes()).unwrap();
        assert_eq!(doc.countries.len(), 1);
        assert_eq!(doc.countries[0].cities[0].time_zone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(doc.countries[0].cities[0].id, RecordId::Number(11.into()));
        assert_eq!(doc.temples[0].id, RecordId::Text("t-1".to_string()));
        assert_eq!(doc.temples[0].time_zone, None);
        assert!(doc.beaches.is_empty());
    }

    #[test]
    fn test_missing_collection_is_malformed() {
        let json = r#"{"countries": [], "temples": []}"#;
        assert!(matches!(parse_document(json.as_bytes()), Err(crate::ApiError::Parse(_))));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(parse_document(b"<html>not json</html>").is_err());
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Number(7.into()).to_string(), "7");
        assert_eq!(RecordId::Text("bora".into()).to_string(), "bora");
    }

    #[test]
    fn test_negative_and_fractional_ids_parse() {
        let json = r#"{
            "countries": [],
            "temples": [{"id": 2.5, "name": "Borobudur"}],
            "beaches": [{"id": -1, "name": "Bora Bora"}]
        }"#;

        let doc = parse_document(json.as_bytes()).unwrap();
        assert_eq!(doc.beaches[0].id.to_string(), "-1");
        assert_eq!(doc.temples[0].id.to_string(), "2.5");
    }
}
