use std::collections::HashMap;

use tracing::debug;

use super::card::check_url;
use crate::types::{Relationship, ValidationIssue};

pub fn check_relationships(relationships: &[Relationship], issues: &mut Vec<ValidationIssue>) {
    debug!("Checking {} relationship(s)", relationships.len());

    let mut first_by_name: HashMap<&str, usize> = HashMap::new();

    for (i, rel) in relationships.iter().enumerate() {
        let path = format!("relationships[{}]", i);

        if rel.name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                format!("{}.name", path),
                "MISSING_FIELD",
                format!("Relationship #{}: Name is required", i + 1),
            ));
        } else if let Some(first) = first_by_name.get(rel.name.as_str()) {
            // Same display name may legitimately point at different peers
            issues.push(
                ValidationIssue::warning(
                    format!("{}.name", path),
                    "DUPLICATE_RELATIONSHIP",
                    format!(
                        "Relationship #{}: name '{}' is also used by relationship #{}",
                        i + 1,
                        rel.name,
                        first + 1
                    ),
                )
                .with_related(format!("relationships[{}].name", first)),
            );
        } else {
            first_by_name.insert(rel.name.as_str(), i);
        }

        if rel.url.trim().is_empty() {
            issues.push(ValidationIssue::error(
                format!("{}.url", path),
                "MISSING_FIELD",
                format!("Relationship #{}: URL is required", i + 1),
            ));
        } else {
            check_url(&format!("{}.url", path), &rel.url, issues);
        }
    }
}
