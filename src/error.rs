// Error types for the j2t codegen pipeline.

use std::fmt;

/// Failure modes of wrapper synthesis and type translation.
#[derive(Debug)]
pub enum CodegenError {
    /// The input class is an enum; enum wrappers are a separate code path
    /// and must never reach class-wrapper synthesis.
    EnumClass(String),
    /// A fully-qualified name has no entry in the type-info registry.
    UnknownType(String),
    /// The type translator could not produce a TypeScript type.
    Translation { type_name: String, reason: String },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::EnumClass(name) => {
                write!(f, "enum type {name} cannot get a class wrapper; route it to the enum path")
            }
            CodegenError::UnknownType(name) => write!(f, "unknown type: {name}"),
            CodegenError::Translation { type_name, reason } => {
                write!(f, "cannot translate {type_name}: {reason}")
            }
        }
    }
}

impl std::error::Error for CodegenError {}

/// Convenience alias used throughout the generator.
pub type CodegenResult<T> = Result<T, CodegenError>;
