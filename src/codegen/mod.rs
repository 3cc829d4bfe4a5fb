pub mod literal;
pub mod sections;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::types::{AgentConfiguration, GenerateError};
use crate::validate::ValidatedConfiguration;

/// Names imported or defined at module level by the generated source.
/// User-supplied class names must not shadow any of them.
pub const GENERATED_NAMES: &[&str] = &[
    "A2AStarletteApplication",
    "AgentCapabilities",
    "AgentCard",
    "AgentExecutor",
    "AgentSkill",
    "DefaultRequestHandler",
    "EventQueue",
    "InMemoryTaskStore",
    "RequestContext",
    "agent_relationships",
    "build_application",
    "extended_agent_card",
    "public_agent_card",
    "uvicorn",
];

pub const TARGET_LANGUAGE: &str = "python";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub language: String,
    pub source: String,
    /// SHA-256 of `source`, hex encoded
    pub digest: String,
}

/// Generate source for a snapshot the caller believes is valid.
///
/// Fails with [`GenerateError::PreconditionViolation`] if the snapshot still
/// has error-severity issues; that is a bug in the caller.
pub fn generate(config: &AgentConfiguration) -> Result<GeneratedSource, GenerateError> {
    let validated = ValidatedConfiguration::new(config.clone()).map_err(|report| {
        let first_field = report
            .errors()
            .next()
            .map(|i| i.field.clone())
            .unwrap_or_default();
        GenerateError::PreconditionViolation {
            error_count: report.errors().count(),
            first_field,
        }
    })?;

    Ok(render(&validated))
}

/// Render a validated snapshot. Output is byte-identical for equal input.
pub fn render(validated: &ValidatedConfiguration) -> GeneratedSource {
    let config = validated.config();
    let base = &config.agent_card;
    let extended = config
        .extended_agent_card
        .as_ref()
        .map(|ext| ext.resolve(base));

    debug!(
        "Rendering agent '{}' ({} skill(s), extended card: {}, {} relationship(s))",
        base.name,
        base.skills.len(),
        extended.is_some(),
        config.relationships.len()
    );

    let mut out = String::new();
    sections::header(&mut out);
    sections::imports(&mut out, &config.server);
    sections::agent_card(
        &mut out,
        "Agent Card",
        "public_agent_card",
        base,
        extended.is_some(),
    );
    if let Some(card) = &extended {
        sections::agent_card(
            &mut out,
            "Extended Agent Card",
            "extended_agent_card",
            card,
            false,
        );
    }
    sections::server(&mut out, &config.server, extended.is_some());
    sections::relationships(&mut out, &config.relationships);
    sections::executor_placeholder(&mut out, &config.server.executor_class_name);
    sections::entry_point(&mut out, &base.url);

    let digest = hex::encode(Sha256::digest(out.as_bytes()));
    debug!("Rendered {} bytes (sha256 {})", out.len(), digest);

    GeneratedSource {
        language: TARGET_LANGUAGE.to_string(),
        source: out,
        digest,
    }
}
