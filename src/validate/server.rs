use tracing::debug;

use super::identifier::{dotted_path_problem, identifier_problem};
use crate::codegen::GENERATED_NAMES;
use crate::types::{ServerConfigModel, TaskStore, ValidationIssue};

pub fn check_server(server: &ServerConfigModel, issues: &mut Vec<ValidationIssue>) {
    debug!(
        "Checking server configuration (executor: '{}', task store: {})",
        server.executor_class_name,
        server.task_store.as_str()
    );

    let executor = server.executor_class_name.as_str();
    if let Some(problem) = identifier_problem(executor) {
        issues.push(ValidationIssue::error(
            "server.executor_class_name",
            if executor.trim().is_empty() { "MISSING_FIELD" } else { "INVALID_IDENTIFIER" },
            format!("Server Configuration: Agent Executor Class Name {}", problem),
        ));
    } else if GENERATED_NAMES.contains(&executor) {
        issues.push(ValidationIssue::error(
            "server.executor_class_name",
            "RESERVED_NAME",
            format!(
                "Server Configuration: '{}' clashes with a name defined by the generated module",
                executor
            ),
        ));
    }

    let TaskStore::Custom { path } = &server.task_store else {
        return;
    };

    if let Some(problem) = dotted_path_problem(path) {
        issues.push(ValidationIssue::error(
            "server.task_store.path",
            if path.trim().is_empty() { "MISSING_FIELD" } else { "INVALID_IDENTIFIER" },
            format!("Server Configuration: Custom Task Store Class {}", problem),
        ));
        return;
    }

    let class_name = server.task_store.class_name();
    if GENERATED_NAMES.contains(&class_name) {
        issues.push(ValidationIssue::error(
            "server.task_store.path",
            "RESERVED_NAME",
            format!(
                "Server Configuration: custom task store class '{}' clashes with a name defined by the generated module",
                class_name
            ),
        ));
    } else if class_name == executor {
        issues.push(
            ValidationIssue::error(
                "server.task_store.path",
                "RESERVED_NAME",
                format!(
                    "Server Configuration: custom task store class '{}' has the same name as the executor class",
                    class_name
                ),
            )
            .with_related("server.executor_class_name"),
        );
    }
}
