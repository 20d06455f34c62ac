//! # Annotation attribute whitelisting
//!
//! A registry-only stage, independently invokable from the block
//! pipeline: for every annotation actually referenced by a character,
//! rebuild its data keeping only the attributes its type's rule
//! names. Annotations in the registry that no character references
//! are not this stage's concern and are left untouched.
//!
//! This stage assumes upstream annotation-type filtering already ran:
//! a referenced annotation whose type has no rule is a caller
//! contract violation and fails fatally.

use crate::{AnnotationRule, FilterError};
use redraft_model::ContentState;
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// Rebuild the data of every referenced annotation, copying only the
/// attributes named by its type's rule. Attributes absent from the
/// source data are omitted, never synthesized.
pub fn filter_annotation_attributes(
    content: &ContentState,
    rules: &[AnnotationRule],
) -> Result<ContentState, FilterError> {
    let index: HashMap<&str, &AnnotationRule> = {
        let mut index = HashMap::new();
        for rule in rules {
            index.entry(rule.annotation_type.as_str()).or_insert(rule);
        }
        index
    };

    let referenced: BTreeSet<&str> = content
        .blocks()
        .iter()
        .flat_map(|block| block.chars.iter())
        .filter_map(|c| c.annotation.as_deref())
        .collect();

    let mut annotations = content.annotations().clone();
    let mut changed = false;

    for key in referenced {
        // Dangling references are upstream filtering's concern.
        let annotation = match content.annotation(key) {
            Some(a) => a,
            None => continue,
        };
        let rule = index
            .get(annotation.annotation_type.as_str())
            .ok_or_else(|| FilterError::MissingAnnotationRule(annotation.annotation_type.clone()))?;

        let data: BTreeMap<String, Value> = rule
            .attributes
            .iter()
            .filter_map(|name| {
                annotation
                    .data
                    .get(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect();

        if data != annotation.data {
            annotations.insert(key.to_string(), Arc::new(annotation.with_data(data)));
            changed = true;
        }
    }

    if !changed {
        return Ok(content.clone());
    }
    Ok(content.with_annotations(annotations))
}

/// Gate predicate: does `data` satisfy every per-attribute pattern in
/// the rule's whitelist? A missing attribute is tested as the empty
/// string, so a pattern can insist on absence (`"^$"`) or presence
/// (`".+"`). Pattern compilation failures are fatal.
pub fn passes_attribute_whitelist(
    rule: &AnnotationRule,
    data: &BTreeMap<String, Value>,
) -> Result<bool, FilterError> {
    for (attribute, pattern) in &rule.whitelist {
        let regex = Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
            attribute: attribute.clone(),
            source,
        })?;
        let value = data.get(attribute).map(value_as_string).unwrap_or_default();
        if !regex.is_match(&value) {
            return Ok(false);
        }
    }
    Ok(true)
}

// Attribute values are open-ended JSON; patterns match their string
// rendering (strings unquoted, everything else in JSON syntax).
fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
