use crate::domain::model::ProjectStatus;
use serde_json::Value;

/// Raw fields projected out of a JSON-LD document before typed construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub project_name: String,
    pub status: String,
}

/// Checks the JSON-LD envelope and domain fields, accumulating one message per
/// violation. An empty result means the document is valid. A non-object value
/// reports every field as missing.
pub fn validate_jsonld_structure(document: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if document.get("@context").is_none() {
        errors.push("@context is required in JSON-LD".to_string());
    }
    if document.get("@type").is_none() {
        errors.push("@type is required in JSON-LD".to_string());
    }

    match document.get("projectName") {
        None => errors.push("projectName is required".to_string()),
        Some(name) => {
            if !name.as_str().is_some_and(|s| !s.trim().is_empty()) {
                errors.push("projectName must be a non-empty string".to_string());
            }
        }
    }

    match document.get("status") {
        None => errors.push("status is required".to_string()),
        Some(status) => {
            let known = status
                .as_str()
                .is_some_and(|s| ProjectStatus::ALL.iter().any(|v| v.as_str() == s));
            if !known {
                errors.push(format!(
                    "status must be one of {}",
                    ProjectStatus::allowed_values()
                ));
            }
        }
    }

    errors
}

/// Projects the domain fields out of a document that already passed
/// [`validate_jsonld_structure`]. Missing fields default to empty strings;
/// only the name is trimmed.
pub fn extract_project_data(document: &Value) -> ProjectDraft {
    ProjectDraft {
        project_name: document
            .get("projectName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string(),
        status: document
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
