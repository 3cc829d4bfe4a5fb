use serde::{Deserialize, Serialize};

/// Task store strategy for the generated request handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskStore {
    InMemory,
    /// User-supplied store, either `ClassName` or a dotted `pkg.module.ClassName`
    Custom { path: String },
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::InMemory
    }
}

/// Built-in strategies, as exposed by `GET /task-stores`
pub const BUILTIN_TASK_STORES: &[&str] = &["in_memory"];

impl TaskStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStore::InMemory => "in_memory",
            TaskStore::Custom { .. } => "custom",
        }
    }

    /// Class name instantiated by the generated code
    pub fn class_name(&self) -> &str {
        match self {
            TaskStore::InMemory => "InMemoryTaskStore",
            TaskStore::Custom { path } => path.rsplit('.').next().unwrap_or(path),
        }
    }

    /// Module to import the class from, if any
    pub fn module(&self) -> Option<&str> {
        match self {
            TaskStore::InMemory => Some("a2a.server.tasks"),
            TaskStore::Custom { path } => path.rsplit_once('.').map(|(module, _)| module),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfigModel {
    #[serde(
        default,
        alias = "agentExecutorClassName",
        alias = "agent_executor_class_name"
    )]
    pub executor_class_name: String,

    #[serde(default, alias = "taskStore")]
    pub task_store: TaskStore,
}
