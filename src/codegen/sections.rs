use url::Url;

use super::literal::{bool_literal, string_list, string_literal};
use crate::types::{
    AgentCapabilities, AgentCardModel, Relationship, ServerConfigModel, SkillDescriptor, TaskStore,
};

/// Port served by the `__main__` block when the card URL has none
const FALLBACK_PORT: u16 = 8000;

pub const EXECUTOR_BEGIN_MARKER: &str =
    "# ===== BEGIN AGENT EXECUTOR: fill in your agent logic below =====";
pub const EXECUTOR_END_MARKER: &str = "# ===== END AGENT EXECUTOR =====";

pub fn header(out: &mut String) {
    out.push_str("# Generated by cardforge. Regenerate to change card or server wiring;\n");
    out.push_str("# only the agent executor section is meant to be edited by hand.\n\n");
}

pub fn imports(out: &mut String, server: &ServerConfigModel) {
    out.push_str("from a2a.server.agent_execution import AgentExecutor, RequestContext\n");
    out.push_str("from a2a.server.apps import A2AStarletteApplication\n");
    out.push_str("from a2a.server.events import EventQueue\n");
    out.push_str("from a2a.server.request_handlers import DefaultRequestHandler\n");
    if server.task_store == TaskStore::InMemory {
        out.push_str("from a2a.server.tasks import InMemoryTaskStore\n");
    }
    out.push_str("from a2a.types import AgentCapabilities, AgentCard, AgentSkill\n");

    if let TaskStore::Custom { .. } = &server.task_store {
        match server.task_store.module() {
            Some(module) => out.push_str(&format!(
                "from {} import {}\n",
                module,
                server.task_store.class_name()
            )),
            None => out.push_str(&format!(
                "# {} must be importable here; add its import above.\n",
                server.task_store.class_name()
            )),
        }
    }
}

/// `<variable> = AgentCard(...)` with every field as a literal
pub fn agent_card(
    out: &mut String,
    title: &str,
    variable: &str,
    card: &AgentCardModel,
    advertises_extended: bool,
) {
    out.push_str(&format!("\n\n# --- {} ---\n", title));
    out.push_str(&format!("{} = AgentCard(\n", variable));
    out.push_str(&format!("    name={},\n", string_literal(&card.name)));
    out.push_str(&format!("    description={},\n", string_literal(&card.description)));
    out.push_str(&format!("    url={},\n", string_literal(&card.url)));
    out.push_str(&format!("    version={},\n", string_literal(&card.version)));
    out.push_str(&format!(
        "    default_input_modes={},\n",
        string_list(&card.default_input_modes)
    ));
    out.push_str(&format!(
        "    default_output_modes={},\n",
        string_list(&card.default_output_modes)
    ));
    capabilities(out, &card.capabilities);
    skills(out, &card.skills);
    if advertises_extended {
        out.push_str("    supports_authenticated_extended_card=True,\n");
    }
    out.push_str(")\n");
}

fn capabilities(out: &mut String, caps: &AgentCapabilities) {
    out.push_str("    capabilities=AgentCapabilities(\n");
    out.push_str(&format!("        streaming={},\n", bool_literal(caps.streaming)));
    out.push_str(&format!(
        "        push_notifications={},\n",
        bool_literal(caps.push_notifications)
    ));
    out.push_str(&format!(
        "        state_transition_history={},\n",
        bool_literal(caps.state_transition_history)
    ));
    out.push_str("    ),\n");
}

fn skills(out: &mut String, skills: &[SkillDescriptor]) {
    if skills.is_empty() {
        out.push_str("    skills=[],\n");
        return;
    }

    out.push_str("    skills=[\n");
    for skill in skills {
        out.push_str("        AgentSkill(\n");
        out.push_str(&format!("            id={},\n", string_literal(&skill.id)));
        out.push_str(&format!("            name={},\n", string_literal(&skill.name)));
        out.push_str(&format!(
            "            description={},\n",
            string_literal(skill.description.as_deref().unwrap_or(""))
        ));
        out.push_str(&format!("            tags={},\n", string_list(&skill.tags)));
        out.push_str(&format!("            examples={},\n", string_list(&skill.examples)));
        out.push_str("        ),\n");
    }
    out.push_str("    ],\n");
}

/// `build_application()`: request handler plus application wiring.
///
/// The executor is referenced by name only; its class is defined in the
/// placeholder section, which is resolved when the function is called.
pub fn server(out: &mut String, server: &ServerConfigModel, has_extended: bool) {
    out.push_str("\n\n# --- Server Configuration ---\n");
    out.push_str("def build_application() -> A2AStarletteApplication:\n");
    out.push_str("    request_handler = DefaultRequestHandler(\n");
    out.push_str(&format!(
        "        agent_executor={}(),\n",
        server.executor_class_name
    ));
    out.push_str(&format!(
        "        task_store={}(),\n",
        server.task_store.class_name()
    ));
    out.push_str("    )\n");
    out.push_str("    return A2AStarletteApplication(\n");
    out.push_str("        agent_card=public_agent_card,\n");
    out.push_str("        http_handler=request_handler,\n");
    if has_extended {
        out.push_str("        extended_agent_card=extended_agent_card,\n");
    }
    out.push_str("    )\n");
}

/// Informational list of `(name, url)` pairs; duplicates are kept
pub fn relationships(out: &mut String, relationships: &[Relationship]) {
    out.push_str("\n\n# --- Agent Relationships ---\n");
    if relationships.is_empty() {
        out.push_str("agent_relationships = []\n");
        return;
    }

    out.push_str("agent_relationships = [\n");
    for rel in relationships {
        out.push_str(&format!(
            "    ({}, {}),\n",
            string_literal(&rel.name),
            string_literal(&rel.url)
        ));
    }
    out.push_str("]\n");
}

pub fn executor_placeholder(out: &mut String, class_name: &str) {
    out.push_str("\n\n");
    out.push_str(EXECUTOR_BEGIN_MARKER);
    out.push('\n');
    out.push_str(&format!("class {}(AgentExecutor):\n", class_name));
    for method in ["execute", "cancel"] {
        if method == "cancel" {
            out.push('\n');
        }
        out.push_str(&format!(
            "    async def {}(self, context: RequestContext, event_queue: EventQueue) -> None:\n",
            method
        ));
        out.push_str(&format!(
            "        raise NotImplementedError(\"{}.{}\")\n",
            class_name, method
        ));
    }
    out.push_str(EXECUTOR_END_MARKER);
    out.push('\n');
}

pub fn entry_point(out: &mut String, card_url: &str) {
    let port = Url::parse(card_url)
        .ok()
        .and_then(|u| u.port_or_known_default())
        .unwrap_or(FALLBACK_PORT);

    out.push_str("\n\nif __name__ == \"__main__\":\n");
    out.push_str("    import uvicorn\n\n");
    out.push_str(&format!(
        "    uvicorn.run(build_application().build(), host=\"0.0.0.0\", port={})\n",
        port
    ));
}
