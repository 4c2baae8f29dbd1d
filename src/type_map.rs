// Java type -> TypeScript type mapping (the default translator).

use crate::context::InterpretContext;
use crate::error::{CodegenError, CodegenResult};
use crate::schema::JavaType;

/// Java types that box or alias a JS number.
const NUMBER_TYPES: &[&str] = &[
    "byte",
    "short",
    "int",
    "long",
    "float",
    "double",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Number",
    "java.math.BigDecimal",
    "java.math.BigInteger",
];

const STRING_TYPES: &[&str] = &[
    "char",
    "java.lang.Character",
    "java.lang.String",
    "java.lang.CharSequence",
    "java.lang.StringBuilder",
    "java.lang.StringBuffer",
];

/// Collection types rendered as TS arrays, element type from the first
/// generic argument.
const ARRAY_TYPES: &[&str] = &[
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Collection",
    "java.util.Set",
    "java.util.HashSet",
];

/// Map types rendered as TS index signatures, value type from the second
/// generic argument. Java map keys serialize as strings on the bridge.
const MAP_TYPES: &[&str] = &["java.util.Map", "java.util.HashMap", "java.util.TreeMap"];

/// Translate one Java type reference to a TypeScript type expression.
/// Names that are neither builtins nor registered classes fail translation.
pub fn java_type_to_ts(ty: &JavaType, ctx: &dyn InterpretContext) -> CodegenResult<String> {
    let name = ty.name.as_str();

    if NUMBER_TYPES.contains(&name) {
        return Ok("number".into());
    }
    if STRING_TYPES.contains(&name) {
        return Ok("string".into());
    }
    if name == "boolean" || name == "java.lang.Boolean" {
        return Ok("boolean".into());
    }
    if name == "void" || name == "java.lang.Void" {
        return Ok("void".into());
    }
    if name == "java.lang.Object" {
        return Ok("any".into());
    }

    if let Some(elem) = name.strip_suffix("[]") {
        let elem_ts = java_type_to_ts(&JavaType::named(elem), ctx)?;
        return Ok(format!("Array<{elem_ts}>"));
    }

    if ARRAY_TYPES.contains(&name) {
        let elem = match ty.type_args.first() {
            Some(arg) => java_type_to_ts(arg, ctx)?,
            None => "any".to_string(),
        };
        return Ok(format!("Array<{elem}>"));
    }
    if MAP_TYPES.contains(&name) {
        let value = match ty.type_args.get(1) {
            Some(arg) => java_type_to_ts(arg, ctx)?,
            None => "any".to_string(),
        };
        return Ok(format!("{{ [key: string]: {value} }}"));
    }

    // Bare names at this point are type variables (T, E, ...) the exporter
    // could not resolve; qualified names resolve through the registry.
    if !name.contains('.') {
        return Err(CodegenError::Translation {
            type_name: name.to_string(),
            reason: "unresolved type variable".into(),
        });
    }
    ctx.local_class_name(name)
}
