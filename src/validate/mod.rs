pub mod card;
pub mod identifier;
pub mod relationships;
pub mod server;

use tracing::debug;

use crate::types::{AgentConfiguration, ValidationIssue, ValidationReport};

/// Run every check over a configuration snapshot.
///
/// All sections are checked independently so every problem surfaces in one
/// pass. Issues are ordered agent card, extended card, server, relationships.
pub fn validate(config: &AgentConfiguration) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = vec![];

    let base_skills = card::check_agent_card(&config.agent_card, &mut issues);
    if let Some(extended) = &config.extended_agent_card {
        card::check_extended_card(extended, &base_skills, &mut issues);
    }
    server::check_server(&config.server, &mut issues);
    relationships::check_relationships(&config.relationships, &mut issues);

    let report = ValidationReport { issues };
    debug!(
        "Validation finished: {} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    );
    report
}

/// A snapshot known to have no error-severity issues.
///
/// The only way to obtain one is through [`ValidatedConfiguration::new`],
/// which runs [`validate`].
#[derive(Debug, Clone)]
pub struct ValidatedConfiguration {
    config: AgentConfiguration,
}

impl ValidatedConfiguration {
    pub fn new(config: AgentConfiguration) -> Result<Self, ValidationReport> {
        let report = validate(&config);
        if report.has_errors() {
            return Err(report);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &AgentConfiguration {
        &self.config
    }
}
