//! Plain-text rendering for the command line tool

use crate::config::AnalyzerConfig;
use crate::extractor::DependencyMap;

const CONFIG_RULE_WIDTH: usize = 40;
const DEPENDENCY_RULE_WIDTH: usize = 30;

/// Render the displayed configuration keys with their values
pub fn render_config(config: &AnalyzerConfig) -> String {
    let rule = "-".repeat(CONFIG_RULE_WIDTH);
    let lines: String = config
        .entries()
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect();

    format!("Analyzer configuration:\n{rule}\n{lines}{rule}\n")
}

/// Render the direct dependencies of `package_name` in map order
pub fn render_dependencies(package_name: &str, dependencies: &DependencyMap) -> String {
    if dependencies.is_empty() {
        return format!("Package {} has no dependencies\n", package_name);
    }

    let rule = "-".repeat(DEPENDENCY_RULE_WIDTH);
    let lines: String = dependencies
        .iter()
        .map(|(name, range)| format!(" {}: {}\n", name, range))
        .collect();

    format!(
        "Direct dependencies of {}:\n{}\n{}\nTotal dependencies: {}\n",
        package_name,
        rule,
        lines,
        dependencies.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn render_dependencies_lists_entries_and_total() {
        let dependencies: DependencyMap = [("lodash", "^4.17.21"), ("jest", "^27.0.0")]
            .into_iter()
            .map(|(name, range)| (name.to_string(), range.to_string()))
            .collect();

        let output = render_dependencies("sample", &dependencies);

        assert_eq!(
            output,
            "Direct dependencies of sample:\n\
             ------------------------------\n \
             lodash: ^4.17.21\n \
             jest: ^27.0.0\n\
             \n\
             Total dependencies: 2\n"
        );
    }

    #[test]
    fn render_dependencies_reports_empty_map() {
        let output = render_dependencies("left-pad", &DependencyMap::new());

        assert_eq!(output, "Package left-pad has no dependencies\n");
    }

    #[test]
    fn render_config_includes_example_keys_only() {
        let config = AnalyzerConfig::example();

        let output = render_config(&config);

        assert!(output.starts_with("Analyzer configuration:\n"));
        assert!(output.contains("package_name: express\n"));
        assert!(output.contains("ascii_tree_output: true\n"));
        assert!(output.contains("max_depth: 1\n"));
        assert!(!output.contains("registry_url"));
        assert!(!output.contains("timeout_ms"));
        assert_eq!(output.matches(&"-".repeat(40)).count(), 2);
    }

    #[test]
    fn render_config_shows_file_keys_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"max_depth": 2, "package_name": "react"}"#)
            .unwrap();
        let config = crate::config::read(file.path()).unwrap();

        let output = render_config(&config);

        assert_eq!(
            output,
            "Analyzer configuration:\n\
             ----------------------------------------\n\
             max_depth: 2\n\
             package_name: react\n\
             ----------------------------------------\n"
        );
    }
}
