// Codegen context: class table, type-info registry, and the capability
// trait wrapper synthesis depends on.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{CodegenError, CodegenResult};
use crate::naming;
use crate::schema::{JavaClass, JavaType};
use crate::type_map;

/// Resolved target-language identity of a foreign type.
#[derive(Clone)]
pub struct TypeInfo {
    /// Local TypeScript class name, e.g. "Greeter".
    pub class_name: String,
}

/// The two lookups wrapper synthesis is allowed to make. Kept to exactly
/// these operations so the synthesizer's dependency surface stays small and
/// tests can substitute a stub.
pub trait InterpretContext {
    /// Local target-language class name for a fully-qualified foreign name.
    fn local_class_name(&self, fq_name: &str) -> CodegenResult<String>;
    /// TypeScript type expression for one parameter type. Calls are made
    /// strictly in positional parameter order.
    fn translate_type(&self, ty: &JavaType) -> CodegenResult<String>;
}

/// Production context for a whole metadata dump.
pub struct CodegenContext {
    /// All classes by fully-qualified name, in metadata order.
    pub classes: IndexMap<String, JavaClass>,
    type_info: HashMap<String, TypeInfo>,
}

impl CodegenContext {
    pub fn new(classes: Vec<JavaClass>) -> Self {
        let mut type_info = HashMap::new();
        let mut class_map = IndexMap::new();
        for c in classes {
            type_info.insert(
                c.name.clone(),
                TypeInfo {
                    class_name: naming::local_class_name(&c.name).to_string(),
                },
            );
            class_map.insert(c.name.clone(), c);
        }
        CodegenContext {
            classes: class_map,
            type_info,
        }
    }

    /// Remove blocklisted classes from both the class table and the registry.
    pub fn apply_blocklist(&mut self, blocked: &[String]) {
        for name in blocked {
            self.classes.shift_remove(name);
            self.type_info.remove(name);
        }
    }

    pub fn type_info(&self, fq_name: &str) -> Option<&TypeInfo> {
        self.type_info.get(fq_name)
    }
}

impl InterpretContext for CodegenContext {
    fn local_class_name(&self, fq_name: &str) -> CodegenResult<String> {
        self.type_info
            .get(fq_name)
            .map(|ti| ti.class_name.clone())
            .ok_or_else(|| CodegenError::UnknownType(fq_name.to_string()))
    }

    fn translate_type(&self, ty: &JavaType) -> CodegenResult<String> {
        type_map::java_type_to_ts(ty, self)
    }
}
