//! Normalized per-verse records

use crate::classifier::{Bucket, ParsedVerse};
use crate::error::{Result, VvError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized record written for one verse
///
/// Keys a parser adds beyond the known ones are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Sanskrit text
    pub sa: String,
    /// Telugu text
    pub te: String,
    /// English text
    pub en: String,
    /// Collection-qualified identifier, e.g. `mvr/vishnu/007`
    pub id: String,
    /// Provenance
    pub metadata: RecordMetadata,
    /// Parser-specific extra fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Record provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Source tag, the first segment of the collection name
    pub source: String,
    /// When the record was last regenerated (ISO-8601, UTC)
    pub last_modified: String,
    /// Parser-specific extra metadata
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Output filename for a verse number, e.g. `verse-007.json`
pub fn record_file_name(verse: u32) -> String {
    format!("verse-{verse:03}.json")
}

/// Collection-qualified id for a verse number, e.g. `mvr/vishnu/007`
pub fn record_id(collection: &str, verse: u32) -> String {
    format!("{collection}/{verse:03}")
}

/// Source tag derived from a collection name (`mvr/vishnu` -> `mvr`)
pub fn source_tag(collection: &str) -> &str {
    collection.split('/').next().unwrap_or(collection)
}

/// Check that a parsed record carries the three language fields
pub fn validate_minimal(object: &ParsedVerse, record: &str) -> Result<()> {
    let missing: Vec<&'static str> = Bucket::ALL
        .iter()
        .map(|b| b.key())
        .filter(|key| !object.contains_key(*key))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(VvError::MissingFields {
            record: record.to_string(),
            missing,
        })
    }
}

impl VerseRecord {
    /// Merge a parsed record into a normalized one
    ///
    /// `id` and `metadata.source` keep any value the parser supplied;
    /// `metadata.last_modified` is always set to `timestamp`.
    pub fn from_parsed(
        mut object: ParsedVerse,
        collection: &str,
        verse: u32,
        timestamp: &str,
    ) -> Result<Self> {
        let record = record_file_name(verse);
        validate_minimal(&object, &record)?;

        let sa = take_string(&mut object, "sa", &record)?;
        let te = take_string(&mut object, "te", &record)?;
        let en = take_string(&mut object, "en", &record)?;

        let id = match object.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Null) | None => record_id(collection, verse),
            Some(_) => return Err(invalid_field(&record, "id", "string")),
        };

        let mut metadata = match object.remove("metadata") {
            Some(Value::Object(map)) => map,
            Some(Value::Null) | None => Map::new(),
            Some(_) => return Err(invalid_field(&record, "metadata", "object")),
        };
        let source = match metadata.remove("source") {
            Some(Value::String(source)) => source,
            Some(Value::Null) | None => source_tag(collection).to_string(),
            Some(_) => return Err(invalid_field(&record, "metadata.source", "string")),
        };
        metadata.remove("last_modified");

        Ok(Self {
            sa,
            te,
            en,
            id,
            metadata: RecordMetadata {
                source,
                last_modified: timestamp.to_string(),
                extra: metadata,
            },
            extra: object,
        })
    }

    /// Text of one bucket
    pub fn text(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Sa => &self.sa,
            Bucket::Te => &self.te,
            Bucket::En => &self.en,
        }
    }
}

fn take_string(object: &mut ParsedVerse, key: &str, record: &str) -> Result<String> {
    match object.remove(key) {
        Some(Value::String(text)) => Ok(text),
        _ => Err(invalid_field(record, key, "string")),
    }
}

fn invalid_field(record: &str, field: &str, expected: &'static str) -> VvError {
    VvError::InvalidField {
        record: record.to_string(),
        field: field.to_string(),
        expected,
    }
}
