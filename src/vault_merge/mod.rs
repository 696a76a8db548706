//! Vault merge logic using content-signature deduplication.
//!
//! This module provides the core merge functionality that works on parsed
//! export records. Each record gets an identity signature derived from its
//! essential fields; incoming records whose signature already exists in the
//! base collection are skipped as exact duplicates, everything else is
//! appended. Records that share a display name with a base entry while
//! differing in content are flagged as conflicts and still added, never
//! silently dropped or overwritten.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{Record, VaultDocument};
use crate::error::VaultResult;

/// Identity of a record: (trimmed name, username, password, first URI).
///
/// Missing, null, or non-string fields normalize to the empty string, so
/// signature computation is total. Equality is exact string equality; only
/// the name component is whitespace-trimmed.
pub type Signature = (String, String, String, String);

/// Display fallback for records without a usable `name`.
pub const UNNAMED: &str = "(no name)";

/// Sentinel used in conflict reports when a record carries no username.
const NO_USERNAME: &str = "N/A";

/// An added record whose display name collides with a base record while its
/// content differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Display name shared with a base record
    pub name: String,
    /// Username of the incoming record, or "N/A" when absent
    pub username: String,
}

/// Statistics about what was merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Records carried over from the base collection (always its full size)
    pub base_count: u32,
    /// Incoming records appended to the output
    pub added_count: u32,
    /// Incoming records dropped as exact duplicates of a base record
    pub skipped_count: u32,
}

/// Result of merging two record collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeResult {
    /// Merged records: the full base collection followed by accepted
    /// incoming records, relative order preserved within each group.
    pub items: Vec<Record>,
    /// Classification counters
    pub stats: MergeStats,
    /// Display names of added records, in output order
    pub added: Vec<String>,
    /// Display names of skipped duplicates, in input order
    pub skipped: Vec<String>,
    /// Added records whose name collides with a base record
    pub conflicts: Vec<Conflict>,
}

/// Output of a document-level merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOutput {
    /// Base document with only `items` replaced by the merged sequence
    pub document: VaultDocument,
    /// Classification counters
    pub stats: MergeStats,
    /// Display names of added records, in output order
    pub added: Vec<String>,
    /// Display names of skipped duplicates, in input order
    pub skipped: Vec<String>,
    /// Added records whose name collides with a base record
    pub conflicts: Vec<Conflict>,
}

impl MergeOutput {
    /// Total number of incoming records, regardless of classification.
    pub fn incoming_count(&self) -> u32 {
        self.stats.added_count + self.stats.skipped_count
    }

    /// Total number of records in the merged output.
    pub fn total_count(&self) -> u32 {
        self.stats.base_count + self.stats.added_count
    }
}

/// Compute the identity signature of a record.
///
/// Extracts `name` (trimmed), `login.username`, `login.password` and the
/// `uri` of the first entry in `login.uris`. Extraction is best-effort:
/// absent or null fields degrade to the empty string rather than failing.
pub fn compute_signature(record: &Record) -> Signature {
    let name = record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();

    let login = record.get("login").and_then(Value::as_object);

    let username = login
        .and_then(|l| l.get("username"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let password = login
        .and_then(|l| l.get("password"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let first_uri = login
        .and_then(|l| l.get("uris"))
        .and_then(Value::as_array)
        .and_then(|uris| uris.first())
        .and_then(Value::as_object)
        .and_then(|u| u.get("uri"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    (name, username, password, first_uri)
}

/// Merge an incoming record collection into a base collection.
///
/// The base collection is always fully retained, in order. The seen-signature
/// set is seeded from the base pass only and never updated while streaming
/// the incoming records, so duplicates internal to the incoming collection
/// pass through as separate additions; only collisions with the base are
/// deduplicated. Conflict detection compares raw (untrimmed) names, unlike
/// the trimmed name inside the signature.
pub fn merge_items(base: &[Record], incoming: &[Record]) -> MergeResult {
    let mut items: Vec<Record> = Vec::with_capacity(base.len() + incoming.len());
    let mut seen_signatures: HashSet<Signature> = HashSet::new();
    let mut base_names: HashSet<Option<String>> = HashSet::new();
    let mut stats = MergeStats::default();

    for record in base {
        seen_signatures.insert(compute_signature(record));
        base_names.insert(raw_name(record));
        items.push(record.clone());
        stats.base_count += 1;
    }

    let mut added: Vec<String> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();
    let mut conflicts: Vec<Conflict> = Vec::new();

    for record in incoming {
        let signature = compute_signature(record);
        let name = raw_name(record).unwrap_or_else(|| UNNAMED.to_string());

        if seen_signatures.contains(&signature) {
            stats.skipped_count += 1;
            skipped.push(name);
        } else {
            stats.added_count += 1;
            items.push(record.clone());

            if base_names.contains(&Some(name.clone())) {
                let username = login_username(record).unwrap_or_else(|| NO_USERNAME.to_string());
                conflicts.push(Conflict {
                    name: name.clone(),
                    username,
                });
            }

            added.push(name);
        }
    }

    MergeResult {
        items,
        stats,
        added,
        skipped,
        conflicts,
    }
}

/// Main entry point: merge two export documents.
///
/// Produces a new document cloned from the base with only `items` replaced
/// by the merged sequence; all other base top-level fields (encryption
/// metadata, folder definitions) survive verbatim.
pub fn merge_vaults(base: &VaultDocument, incoming: &VaultDocument) -> MergeOutput {
    let MergeResult {
        items,
        stats,
        added,
        skipped,
        conflicts,
    } = merge_items(&base.items(), &incoming.items());

    MergeOutput {
        document: base.with_items(items),
        stats,
        added,
        skipped,
        conflicts,
    }
}

/// Merge two JSON document strings and return the JSON-serialized output.
/// Convenience function for callers that work on raw strings.
pub fn merge_vaults_json(base_json: &str, incoming_json: &str) -> VaultResult<String> {
    let base = VaultDocument::from_json(base_json)?;
    let incoming = VaultDocument::from_json(incoming_json)?;
    let output = merge_vaults(&base, &incoming);
    Ok(serde_json::to_string(&output)?)
}

/// Raw (untrimmed) display name; `None` when absent or not a string.
fn raw_name(record: &Record) -> Option<String> {
    record.get("name").and_then(Value::as_str).map(String::from)
}

/// The `login.username` field; `None` when absent or not a string.
fn login_username(record: &Record) -> Option<String> {
    record
        .get("login")
        .and_then(Value::as_object)
        .and_then(|l| l.get("username"))
        .and_then(Value::as_str)
        .map(String::from)
}
