//! Identifier syntax for names emitted verbatim into generated Python.

/// Python hard keywords; none of these may be used as a class or module name
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn is_keyword(s: &str) -> bool {
    PYTHON_KEYWORDS.contains(&s)
}

/// `__name__`, `__main__`, `__init__`: binding one at module level rebinds interpreter state
pub fn is_dunder(s: &str) -> bool {
    s.len() > 4 && s.starts_with("__") && s.ends_with("__")
}

/// Why `s` cannot be used as a bare identifier, if it can't
pub fn identifier_problem(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        Some("is required".to_string())
    } else if !is_identifier(s) {
        Some(format!(
            "'{}' is not a valid identifier (letters, digits and underscore, not starting with a digit)",
            s
        ))
    } else if is_keyword(s) {
        Some(format!("'{}' is a reserved Python keyword", s))
    } else if is_dunder(s) {
        Some(format!(
            "'{}' is a double-underscore name reserved by Python (e.g. __name__)",
            s
        ))
    } else {
        None
    }
}

/// Why `s` cannot be used as a `pkg.module.Class` import path, if it can't
pub fn dotted_path_problem(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return Some("is required".to_string());
    }

    s.split('.')
        .enumerate()
        .find_map(|(i, segment)| {
            if segment.is_empty() {
                Some(format!("'{}' has an empty segment at position {}", s, i + 1))
            } else {
                identifier_problem(segment).map(|problem| {
                    format!("segment {} of '{}': {}", i + 1, s, problem)
                })
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("EchoExecutor"));
        assert!(is_identifier("_private2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("my-executor"));
        assert!(!is_identifier("Exécuteur"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_keywords_rejected() {
        assert!(identifier_problem("class").is_some());
        assert!(identifier_problem("None").is_some());
        assert!(identifier_problem("match").is_none());
    }

    #[test]
    fn test_dunder_names_rejected() {
        assert!(is_dunder("__name__"));
        assert!(is_dunder("__main__"));
        assert!(!is_dunder("__private"));
        assert!(!is_dunder("_Executor_"));
        assert!(!is_dunder("____"));
        assert!(identifier_problem("__name__").is_some());
        assert!(identifier_problem("__Private").is_none());
        assert!(dotted_path_problem("stores.__name__").is_some());
    }

    #[test]
    fn test_dotted_paths() {
        assert!(dotted_path_problem("my_pkg.stores.RedisTaskStore").is_none());
        assert!(dotted_path_problem("RedisTaskStore").is_none());
        assert!(dotted_path_problem("my_pkg..Store").is_some());
        assert!(dotted_path_problem("my_pkg.Store.").is_some());
        assert!(dotted_path_problem("my-pkg.Store").is_some());
        assert!(dotted_path_problem("import.Store").is_some());
        assert!(dotted_path_problem("   ").is_some());
    }
}
