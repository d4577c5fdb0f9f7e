//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for a single stdin-to-file run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Destination of the JSON report.
    pub output_path: PathBuf,
    /// Write indented JSON instead of a single line.
    pub pretty_output: bool,
}

impl ClientConfig {
    pub const DEFAULT_OUTPUT_PATH: &'static str = "expected.json";

    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            pretty_output: false,
        }
    }

    #[must_use]
    pub fn with_pretty_output(mut self, pretty_output: bool) -> Self {
        self.pretty_output = pretty_output;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROVER_OUTPUT_PATH` - Report destination (default: `expected.json`)
    /// - `ROVER_PRETTY_OUTPUT` - Indent the report JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::var_os("ROVER_OUTPUT_PATH").filter(|path| !path.is_empty()) {
            config.output_path = PathBuf::from(path);
        }

        if let Some(pretty) = read_env::<bool>("ROVER_PRETTY_OUTPUT") {
            config.pretty_output = pretty;
        } else if env::var("ROVER_PRETTY_OUTPUT").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.pretty_output = true;
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT_PATH)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_expected_json() {
        let config = ClientConfig::default();

        assert_eq!(config.output_path, PathBuf::from("expected.json"));
        assert!(!config.pretty_output);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = ClientConfig::new("out/report.json").with_pretty_output(true);

        assert_eq!(config.output_path, PathBuf::from("out/report.json"));
        assert!(config.pretty_output);
    }
}
