//! Request key normalization: clients spell the same column as `thesisNo`, `ThesisNo` or `thesis_no`;
//! the store folds unquoted identifiers to `thesisno`.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Fold an identifier to the store's spelling: lowercase, underscores and dashes dropped.
/// e.g. "thesisNo" -> "thesisno", "InstituteName" -> "institutename", "page_num" -> "pagenum"
pub fn fold_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fold all keys of a JSON object. On collision the last key in iteration order wins.
pub fn object_keys_folded(obj: Map<String, Value>) -> HashMap<String, Value> {
    obj.into_iter().map(|(k, v)| (fold_identifier(&k), v)).collect()
}
