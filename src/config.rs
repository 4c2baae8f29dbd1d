// Configuration types for j2t-codegen, deserialized from j2t.config.toml.

use serde::Deserialize;

/// Top-level config file.
#[derive(Deserialize)]
pub struct J2tConfig {
    pub codegen: CodegenConfig,
}

#[derive(Deserialize)]
pub struct CodegenConfig {
    pub paths: CodegenPaths,
    #[serde(default)]
    pub blocklist: Blocklist,
}

#[derive(Deserialize)]
pub struct CodegenPaths {
    /// Reflection metadata JSON produced by the Java exporter
    /// (relative to the config file location).
    pub metadata_input: String,
    /// Output directory for generated TypeScript.
    pub ts_out: String,
}

#[derive(Deserialize, Default)]
pub struct Blocklist {
    /// Fully-qualified class names to skip entirely.
    #[serde(default)]
    pub classes: Vec<String>,
}
