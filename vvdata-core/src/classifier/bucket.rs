//! Language buckets and their accumulators

use crate::script::Script;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

use super::ParsedVerse;

/// One of the three language-tagged text streams of a verse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Sanskrit (Devanagari, and the fallback for unrecognized text)
    Sa,
    /// Telugu
    Te,
    /// English (any Latin-letter text, transliteration included)
    En,
}

impl Bucket {
    /// All buckets in record field order
    pub const ALL: [Bucket; 3] = [Bucket::Sa, Bucket::Te, Bucket::En];

    /// Field name used in verse records
    pub fn key(self) -> &'static str {
        match self {
            Bucket::Sa => "sa",
            Bucket::Te => "te",
            Bucket::En => "en",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Bucket::Sa => 0,
            Bucket::Te => 1,
            Bucket::En => 2,
        }
    }
}

impl From<Script> for Bucket {
    fn from(script: Script) -> Self {
        match script {
            Script::Telugu => Bucket::Te,
            Script::Latin => Bucket::En,
            Script::Devanagari => Bucket::Sa,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Final text of the three buckets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buckets {
    /// Sanskrit block
    pub sa: String,
    /// Telugu block
    pub te: String,
    /// English block
    pub en: String,
}

impl Buckets {
    /// Text of a single bucket
    pub fn get(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Sa => &self.sa,
            Bucket::Te => &self.te,
            Bucket::En => &self.en,
        }
    }

    /// True when no bucket received any text
    pub fn is_empty(&self) -> bool {
        Bucket::ALL.iter().all(|b| self.get(*b).is_empty())
    }

    /// Convert into the loosely-typed record a parser hands to the coordinator
    pub fn into_object(self) -> ParsedVerse {
        let mut object = ParsedVerse::new();
        object.insert("sa".to_string(), Value::String(self.sa));
        object.insert("te".to_string(), Value::String(self.te));
        object.insert("en".to_string(), Value::String(self.en));
        object
    }
}

/// Line accumulator for the three buckets
#[derive(Debug, Default)]
pub(crate) struct BucketAccumulator {
    lines: [Vec<String>; 3],
}

impl BucketAccumulator {
    pub(crate) fn push(&mut self, bucket: Bucket, line: impl Into<String>) {
        self.lines[bucket.index()].push(line.into());
    }

    /// Join, trim and cap blank-line runs at one blank line
    pub(crate) fn finish(self) -> Buckets {
        let [sa, te, en] = self.lines.map(|lines| clean_block(&lines.join("\n")));
        Buckets { sa, te, en }
    }
}

fn blank_run_pattern() -> &'static regex::Regex {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| regex::Regex::new(r"\n{3,}").expect("static pattern is valid"))
}

pub(crate) fn clean_block(block: &str) -> String {
    blank_run_pattern()
        .replace_all(block.trim(), "\n\n")
        .into_owned()
}
