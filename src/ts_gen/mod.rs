// TypeScript code generation orchestrator.

pub mod printer;
pub mod wrappers;

use std::path::Path;

use crate::context::CodegenContext;
use crate::error::CodegenResult;
use crate::naming;

/// Header emitted at the top of every generated file: the runtime
/// collaborators the wrapper bodies call (hydration, boxed-primitive
/// adapters, bridge dispatch).
const FILE_HEADER: &str = "\
// Generated by j2t-codegen. Do not edit.
import { plainToClass } from 'class-transformer';
import java from 'js-to-java';
import { argumentMap } from 'interpret-util';

";

/// Generate one TypeScript wrapper file per non-enum class, in metadata
/// order. Enum classes belong to a separate code path and are skipped here.
pub fn generate(ctx: &CodegenContext, out_dir: &Path) -> CodegenResult<()> {
    std::fs::create_dir_all(out_dir).expect("Failed to create TypeScript output directory");

    for class in ctx.classes.values() {
        if class.is_enum {
            eprintln!("  skipping enum {}", class.name);
            continue;
        }

        let decl = wrappers::to_wrapper_class(class, ctx)?;
        let mut code = String::with_capacity(1024);
        code.push_str(FILE_HEADER);
        code.push_str(&printer::declaration_source(&decl));

        let filename = format!("{}.ts", naming::local_class_name(&class.name));
        std::fs::write(out_dir.join(&filename), code)
            .unwrap_or_else(|e| panic!("Failed to write {filename}: {e}"));
    }

    Ok(())
}

/// File names `generate` is expected to have produced, for post-run
/// verification.
pub fn expected_files(ctx: &CodegenContext) -> Vec<String> {
    ctx.classes
        .values()
        .filter(|c| !c.is_enum)
        .map(|c| format!("{}.ts", naming::local_class_name(&c.name)))
        .collect()
}
