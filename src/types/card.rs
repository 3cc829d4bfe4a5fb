use serde::{Deserialize, Serialize};

/// One capability advertised by an agent card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCapabilities {
    #[serde(default)]
    pub streaming: bool,

    #[serde(default, alias = "pushNotifications")]
    pub push_notifications: bool,

    #[serde(default, alias = "stateTransitionHistory")]
    pub state_transition_history: bool,
}

/// Capability flags on an extended card; each `None` flag inherits from the base card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitiesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,

    #[serde(
        default,
        alias = "pushNotifications",
        skip_serializing_if = "Option::is_none"
    )]
    pub push_notifications: Option<bool>,

    #[serde(
        default,
        alias = "stateTransitionHistory",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_transition_history: Option<bool>,
}

impl CapabilitiesOverride {
    pub fn resolve(&self, base: AgentCapabilities) -> AgentCapabilities {
        AgentCapabilities {
            streaming: self.streaming.unwrap_or(base.streaming),
            push_notifications: self.push_notifications.unwrap_or(base.push_notifications),
            state_transition_history: self
                .state_transition_history
                .unwrap_or(base.state_transition_history),
        }
    }
}

/// Base agent card (A2A `AgentCard`).
///
/// Required identity fields default to blank when absent from the input, so
/// validation can report every missing one instead of failing on the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCardModel {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, alias = "defaultInputModes")]
    pub default_input_modes: Vec<String>,

    #[serde(default, alias = "defaultOutputModes")]
    pub default_output_modes: Vec<String>,

    #[serde(default)]
    pub capabilities: AgentCapabilities,

    #[serde(default)]
    pub skills: Vec<SkillDescriptor>,
}

/// Extended agent card.
///
/// Every identity field is an override: `None` inherits the base card value,
/// `Some` replaces it (even when equal to the base value). Skills are additive
/// and render after the base card's skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedAgentCardModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        alias = "defaultInputModes",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_input_modes: Option<Vec<String>>,

    #[serde(
        default,
        alias = "defaultOutputModes",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_output_modes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<CapabilitiesOverride>,

    #[serde(default)]
    pub skills: Vec<SkillDescriptor>,
}

impl ExtendedAgentCardModel {
    /// True when no field is overridden and no skill is added
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.version.is_none()
            && self.description.is_none()
            && self.default_input_modes.is_none()
            && self.default_output_modes.is_none()
            && self.capabilities.is_none()
            && self.skills.is_empty()
    }

    /// Resolve overrides against the base card into a fully literal card.
    ///
    /// Absent fields take a copy of the base value; base skills come first,
    /// followed by the extended card's own skills.
    pub fn resolve(&self, base: &AgentCardModel) -> AgentCardModel {
        let pick = |over: &Option<String>, inherited: &String| {
            over.clone().unwrap_or_else(|| inherited.clone())
        };

        AgentCardModel {
            name: pick(&self.name, &base.name),
            url: pick(&self.url, &base.url),
            version: pick(&self.version, &base.version),
            description: pick(&self.description, &base.description),
            default_input_modes: self
                .default_input_modes
                .clone()
                .unwrap_or_else(|| base.default_input_modes.clone()),
            default_output_modes: self
                .default_output_modes
                .clone()
                .unwrap_or_else(|| base.default_output_modes.clone()),
            capabilities: self
                .capabilities
                .map_or(base.capabilities, |caps| caps.resolve(base.capabilities)),
            skills: base
                .skills
                .iter()
                .chain(self.skills.iter())
                .cloned()
                .collect(),
        }
    }
}
