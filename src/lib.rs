// j2t-codegen: reads Java reflection JSON, generates TypeScript marshaling wrappers.

pub mod config;
pub mod context;
pub mod error;
pub mod naming;
pub mod schema;
pub mod ts_gen;
pub mod type_map;

use std::path::Path;

use crate::config::J2tConfig;
use crate::schema::MetadataFile;

/// Run the generate command. Main entry point for codegen.
pub fn run_generate(config_path: &Path) {
    // Load config
    let config_str = std::fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", config_path.display()));
    let j2t_config: J2tConfig = toml::from_str(&config_str)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", config_path.display()));
    let codegen = &j2t_config.codegen;

    // Resolve paths relative to config file directory
    let config_dir = config_path
        .parent()
        .unwrap_or(Path::new("."))
        .canonicalize()
        .unwrap_or_else(|e| panic!("Failed to canonicalize config dir: {e}"));

    let metadata_path = config_dir.join(&codegen.paths.metadata_input);
    let ts_out = config_dir.join(&codegen.paths.ts_out);

    eprintln!("j2t-codegen: loading metadata...");

    let metadata: MetadataFile = {
        let data = std::fs::read_to_string(&metadata_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", metadata_path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", metadata_path.display()))
    };

    eprintln!("  Loaded {} classes", metadata.classes.len());

    // Build context
    let mut ctx = context::CodegenContext::new(metadata.classes);
    ctx.apply_blocklist(&codegen.blocklist.classes);

    // Generate TypeScript wrappers
    eprintln!("j2t-codegen: generating TypeScript wrappers...");
    if let Err(e) = ts_gen::generate(&ctx, &ts_out) {
        eprintln!("j2t-codegen: generation failed: {e}");
        std::process::exit(1);
    }

    // Post-generate verification
    eprintln!("j2t-codegen: verifying output...");
    verify_output(&ctx, &ts_out);

    eprintln!("j2t-codegen: done!");
}

/// Verify codegen output integrity: every expected wrapper file exists and
/// is non-empty.
fn verify_output(ctx: &context::CodegenContext, ts_out: &Path) {
    let mut errors: Vec<String> = Vec::new();

    let expected = ts_gen::expected_files(ctx);
    for name in &expected {
        let path = ts_out.join(name);
        match std::fs::metadata(&path) {
            Ok(m) if m.len() == 0 => errors.push(format!("Output empty: {}", path.display())),
            Err(_) => errors.push(format!("Output missing: {}", path.display())),
            _ => {}
        }
    }

    if errors.is_empty() {
        eprintln!("  OK: {} wrapper files", expected.len());
    } else {
        eprintln!("  Verification FAILED:");
        for e in &errors {
            eprintln!("    - {e}");
        }
        std::process::exit(1);
    }
}
