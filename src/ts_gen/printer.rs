// TypeScript rendering of the wrapper IR.

use super::wrappers::{Coercion, WrapperDeclaration, WrapperMethod};

/// Positional formal-parameter name for index `idx`. Foreign parameter
/// names never become target identifiers.
pub fn formal_arg(idx: usize) -> String {
    format!("arg{idx}")
}

fn render_coercion(coercion: &Coercion, idx: usize) -> String {
    let arg = formal_arg(idx);
    match coercion {
        Coercion::Boxed { ctor } => format!("{ctor}({arg})"),
        Coercion::Hydrate { ts_type } => {
            format!("{arg} instanceof {ts_type} ? {arg} : plainToClass({ts_type}, {arg})")
        }
    }
}

/// Render one method entry:
/// `name: function(arg0) { return argumentMap(...[<coercion0>]) }`.
pub fn render_method(method: &WrapperMethod) -> String {
    let formals: Vec<String> = (0..method.coercions.len()).map(formal_arg).collect();
    let coercions: Vec<String> = method
        .coercions
        .iter()
        .enumerate()
        .map(|(idx, c)| render_coercion(c, idx))
        .collect();
    format!(
        "{}: function({}) {{ return argumentMap(...[{}]) }}",
        method.name,
        formals.join(", "),
        coercions.join(", ")
    )
}

/// Render the object-literal initializer for the whole wrapper.
pub fn initializer(decl: &WrapperDeclaration) -> String {
    let entries: Vec<String> = decl.methods.iter().map(render_method).collect();
    format!("{{{}}}", entries.join(", "))
}

/// Render the full declaration statement.
pub fn declaration_source(decl: &WrapperDeclaration) -> String {
    let mut out = String::with_capacity(256);
    if decl.is_exported {
        out.push_str("export ");
    }
    out.push_str(if decl.is_const { "const " } else { "let " });
    out.push_str(&decl.name);
    out.push_str(" = ");
    out.push_str(&initializer(decl));
    out.push_str(";\n");
    out
}
