//! Vault Fusion core library
//!
//! Merges two exported password-vault JSON files into one, including:
//! - **vault_merge**: content-signature deduplication and conflict flagging
//! - **document**: opaque export documents with pass-through of unknown fields
//! - **report**: terminal presentation, kept entirely out of the core
//!
//! The library accepts already-parsed documents and returns in-memory
//! results; the CLI binary handles paths, arguments and console output and
//! calls this library for the core logic.
//!
//! # Example
//! ```
//! use vault_fusion::{merge_vaults, VaultDocument};
//!
//! let base = VaultDocument::from_json(
//!     r#"{"items": [{"name": "Site", "login": {"username": "u", "password": "p"}}]}"#,
//! )
//! .unwrap();
//! let incoming = VaultDocument::from_json(
//!     r#"{"items": [{"name": "Site", "login": {"username": "u", "password": "p"}}]}"#,
//! )
//! .unwrap();
//!
//! let output = merge_vaults(&base, &incoming);
//! assert_eq!(output.stats.skipped_count, 1);
//! assert_eq!(output.document.item_count(), 1);
//! ```

pub mod document;
pub mod error;
pub mod report;
pub mod vault_merge;

pub use document::{Record, VaultDocument};
pub use error::{VaultError, VaultResult};
pub use vault_merge::{
    compute_signature, merge_items, merge_vaults, merge_vaults_json, Conflict, MergeOutput,
    MergeResult, MergeStats, Signature,
};
