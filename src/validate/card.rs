use std::collections::HashMap;

use tracing::debug;
use url::Url;

use crate::types::{AgentCardModel, ExtendedAgentCardModel, SkillDescriptor, ValidationIssue};

/// Skill id -> field path of its first occurrence
pub type SkillIndex = HashMap<String, String>;

/// Check base card identity fields and skills.
///
/// Returns the index of base skill ids so the extended card can be checked
/// for collisions against it.
pub fn check_agent_card(card: &AgentCardModel, issues: &mut Vec<ValidationIssue>) -> SkillIndex {
    debug!("Checking agent card '{}'", card.name);

    require("agent_card.name", "Name", &card.name, issues);
    require("agent_card.url", "URL", &card.url, issues);
    require("agent_card.version", "Version", &card.version, issues);
    check_url("agent_card.url", &card.url, issues);

    check_list("agent_card.default_input_modes", &card.default_input_modes, issues);
    check_list("agent_card.default_output_modes", &card.default_output_modes, issues);

    let mut index = SkillIndex::new();
    check_skills("agent_card", &card.skills, &mut index, None, issues);
    index
}

pub fn check_extended_card(
    card: &ExtendedAgentCardModel,
    base_skills: &SkillIndex,
    issues: &mut Vec<ValidationIssue>,
) {
    debug!("Checking extended agent card");

    if card.is_empty() {
        issues.push(ValidationIssue::warning(
            "extended_agent_card",
            "EXTENDED_CARD_EMPTY",
            "Extended Agent Card overrides nothing and adds no skills; it will mirror the base card",
        ));
    }

    // A present override replaces the base value, so a blank one would blank the field
    for (field, label, value) in [
        ("extended_agent_card.name", "Name", &card.name),
        ("extended_agent_card.url", "URL", &card.url),
        ("extended_agent_card.version", "Version", &card.version),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                issues.push(ValidationIssue::error(
                    field,
                    "BLANK_OVERRIDE",
                    format!(
                        "Extended Agent Card: {} override is blank; omit it to inherit from the Agent Card",
                        label
                    ),
                ));
            }
        }
    }

    if let Some(url) = &card.url {
        check_url("extended_agent_card.url", url, issues);
    }
    if let Some(modes) = &card.default_input_modes {
        check_list("extended_agent_card.default_input_modes", modes, issues);
    }
    if let Some(modes) = &card.default_output_modes {
        check_list("extended_agent_card.default_output_modes", modes, issues);
    }

    let mut index = SkillIndex::new();
    check_skills(
        "extended_agent_card",
        &card.skills,
        &mut index,
        Some(base_skills),
        issues,
    );
}

fn check_skills(
    card_path: &str,
    skills: &[SkillDescriptor],
    index: &mut SkillIndex,
    base: Option<&SkillIndex>,
    issues: &mut Vec<ValidationIssue>,
) {
    let label = card_label(card_path);

    for (i, skill) in skills.iter().enumerate() {
        let path = format!("{}.skills[{}]", card_path, i);
        let id_path = format!("{}.id", path);

        if skill.id.trim().is_empty() {
            issues.push(ValidationIssue::error(
                &id_path,
                "MISSING_FIELD",
                format!("{} - Skill #{}: ID is required", label, i + 1),
            ));
        } else if let Some(first) = index.get(&skill.id) {
            issues.push(
                ValidationIssue::error(
                    &id_path,
                    "DUPLICATE_SKILL_ID",
                    format!(
                        "{} - Skill #{}: ID '{}' is already used by {}",
                        label,
                        i + 1,
                        skill.id,
                        first
                    ),
                )
                .with_related(first.clone()),
            );
        } else {
            if let Some(first) = base.and_then(|b| b.get(&skill.id)) {
                issues.push(
                    ValidationIssue::error(
                        &id_path,
                        "SKILL_ID_COLLISION",
                        format!(
                            "{} - Skill #{}: ID '{}' collides with Agent Card skill {}",
                            label,
                            i + 1,
                            skill.id,
                            first
                        ),
                    )
                    .with_related(first.clone()),
                );
            }
            index.insert(skill.id.clone(), id_path);
        }

        if skill.name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                format!("{}.name", path),
                "MISSING_FIELD",
                format!("{} - Skill #{}: Name is required", label, i + 1),
            ));
        }

        check_list(&format!("{}.tags", path), &skill.tags, issues);
        check_list(&format!("{}.examples", path), &skill.examples, issues);
    }
}

fn card_label(card_path: &str) -> &'static str {
    if card_path == "extended_agent_card" {
        "Extended Agent Card"
    } else {
        "Agent Card"
    }
}

fn require(field: &str, label: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::error(
            field,
            "MISSING_FIELD",
            format!("Agent Card: {} is required", label),
        ));
    }
}

/// Warn when a non-blank URL does not parse as an absolute URL.
/// Reachability is never checked.
pub fn check_url(field: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if value.trim().is_empty() {
        return;
    }

    match Url::parse(value) {
        Ok(parsed) if !parsed.cannot_be_a_base() => {}
        Ok(_) => issues.push(ValidationIssue::warning(
            field,
            "INVALID_URL",
            format!("'{}' is not a hierarchical URL", value),
        )),
        Err(e) => issues.push(ValidationIssue::warning(
            field,
            "INVALID_URL",
            format!("'{}' is not an absolute URL: {}", value, e),
        )),
    }
}

fn check_list(field: &str, values: &[String], issues: &mut Vec<ValidationIssue>) {
    for (i, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::warning(
                format!("{}[{}]", field, i),
                "BLANK_LIST_ENTRY",
                "Blank entry will be emitted as an empty string",
            ));
        }
    }
}
