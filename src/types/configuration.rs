use serde::{Deserialize, Serialize};

use super::card::{AgentCardModel, ExtendedAgentCardModel};
use super::server::ServerConfigModel;

/// Named reference to a peer agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Root aggregate handed to validation and generation.
///
/// A snapshot: assembled once per request and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfiguration {
    #[serde(default, alias = "agentCard")]
    pub agent_card: AgentCardModel,

    #[serde(
        default,
        alias = "extendedAgentCard",
        skip_serializing_if = "Option::is_none"
    )]
    pub extended_agent_card: Option<ExtendedAgentCardModel>,

    #[serde(default)]
    pub server: ServerConfigModel,

    #[serde(default)]
    pub relationships: Vec<Relationship>,
}
