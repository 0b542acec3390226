// Patent record payload: fixed named fields plus one metadata bucket.
// Canonical JSON form here is part of the block hash contract; change it and
// every exported hash changes with it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Sentinel id carried by the genesis payload.
pub const GENESIS_RECORD_ID: &str = "GENESIS-000";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatentType {
    #[serde(rename = "Utility Patent")]
    Utility,
    #[serde(rename = "Design Patent")]
    Design,
    #[serde(rename = "Plant Patent")]
    Plant,
    #[serde(rename = "Provisional Patent")]
    Provisional,
    #[serde(rename = "Software Patent")]
    Software,
    #[serde(rename = "Business Method Patent")]
    BusinessMethod,
    #[serde(rename = "Biotechnology Patent")]
    Biotechnology,
    #[serde(rename = "Chemical Patent")]
    Chemical,
    #[serde(rename = "Mechanical Patent")]
    Mechanical,
    #[serde(rename = "Certificate of Amendment")]
    CertificateOfAmendment,
    Other,
    Genesis,
}

impl PatentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatentType::Utility => "Utility Patent",
            PatentType::Design => "Design Patent",
            PatentType::Plant => "Plant Patent",
            PatentType::Provisional => "Provisional Patent",
            PatentType::Software => "Software Patent",
            PatentType::BusinessMethod => "Business Method Patent",
            PatentType::Biotechnology => "Biotechnology Patent",
            PatentType::Chemical => "Chemical Patent",
            PatentType::Mechanical => "Mechanical Patent",
            PatentType::CertificateOfAmendment => "Certificate of Amendment",
            PatentType::Other => "Other",
            PatentType::Genesis => "Genesis",
        }
    }
}

impl std::fmt::Display for PatentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Pending,
    Active,
    Approved,
    Rejected,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Active => "Active",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
        }
    }
}

/// Caller-supplied payload. Never mutated by the engine once embedded in a
/// block; unrecognized extras (keywords, co-inventors, funding source, ...)
/// land in `metadata`, a sorted map so canonical serialization stays
/// deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatentRecord {
    #[serde(rename = "patent_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub inventor: String,
    pub patent_type: PatentType,
    pub priority: Priority,
    pub status: RecordStatus,
    /// SHA-256 hex digest of an attached document, or empty when none.
    pub doc_hash: String,
    pub estimated_value: Option<u64>,
    pub metadata: BTreeMap<String, String>,
}

impl PatentRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        inventor: impl Into<String>,
        patent_type: PatentType,
        priority: Priority,
    ) -> Self {
        PatentRecord {
            id: generate_patent_id(),
            title: title.into(),
            description: description.into(),
            inventor: inventor.into(),
            patent_type,
            priority,
            status: RecordStatus::Pending,
            doc_hash: String::new(),
            estimated_value: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Fixed payload for block 0.
    pub fn genesis() -> Self {
        PatentRecord {
            id: GENESIS_RECORD_ID.to_owned(),
            title: "Genesis Block".to_owned(),
            description: "First block in the patent blockchain".to_owned(),
            inventor: "System".to_owned(),
            patent_type: PatentType::Genesis,
            priority: Priority::Normal,
            status: RecordStatus::Active,
            doc_hash: String::new(),
            estimated_value: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Canonical JSON: compact, keys sorted lexicographically (serde_json's
    /// default map ordering). The exact byte form is what block hashes and
    /// content digests are computed over, so the field list and key names
    /// here are frozen.
    pub fn canonical_json(&self) -> String {
        let mut map = Map::new();
        map.insert("patent_id".to_owned(), Value::String(self.id.clone()));
        map.insert("title".to_owned(), Value::String(self.title.clone()));
        map.insert(
            "description".to_owned(),
            Value::String(self.description.clone()),
        );
        map.insert("inventor".to_owned(), Value::String(self.inventor.clone()));
        map.insert(
            "patent_type".to_owned(),
            Value::String(self.patent_type.as_str().to_owned()),
        );
        map.insert(
            "priority".to_owned(),
            Value::String(self.priority.as_str().to_owned()),
        );
        map.insert(
            "status".to_owned(),
            Value::String(self.status.as_str().to_owned()),
        );
        map.insert("doc_hash".to_owned(), Value::String(self.doc_hash.clone()));
        map.insert(
            "estimated_value".to_owned(),
            match self.estimated_value {
                Some(v) => Value::from(v),
                None => Value::Null,
            },
        );
        let mut meta = Map::new();
        for (k, v) in &self.metadata {
            meta.insert(k.clone(), Value::String(v.clone()));
        }
        map.insert("metadata".to_owned(), Value::Object(meta));
        Value::Object(map).to_string()
    }
}

/// `PAT-` followed by the first 8 hex chars of a v4 UUID, uppercased.
pub fn generate_patent_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("PAT-{}", uuid[..8].to_uppercase())
}

/// SHA-256 hex digest for attached document bytes.
pub fn hash_document(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
