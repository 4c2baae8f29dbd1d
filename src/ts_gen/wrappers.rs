// Wrapper synthesis: one call-marshaling wrapper per non-enum class.

use std::collections::HashSet;

use crate::context::InterpretContext;
use crate::error::{CodegenError, CodegenResult};
use crate::naming;
use crate::schema::{JavaClass, JavaType};

/// Namespace prefix that selects the boxed-primitive coercion path.
const BOXED_PREFIX: &str = "java.lang";

/// Per-argument normalization strategy in a generated wrapper body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coercion {
    /// java.lang type: call the same-named js-to-java adapter, obtained by
    /// dropping the ".lang" segment ("java.lang.String" -> `java.String`).
    Boxed { ctor: String },
    /// Anything else: pass through if the value is already an instance of
    /// the translated type, otherwise hydrate it with `plainToClass`.
    Hydrate { ts_type: String },
}

/// One emitted wrapper entry. Formals are positional (`arg0`, `arg1`, ...);
/// `coercions[i]` applies to `arg<i>`, so arity is `coercions.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperMethod {
    pub name: String,
    pub coercions: Vec<Coercion>,
}

/// A named, exported, immutable wrapper declaration. The textual form is
/// produced by `printer`; this struct is the renderer-independent IR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperDeclaration {
    pub name: String,
    pub methods: Vec<WrapperMethod>,
    pub is_exported: bool,
    pub is_const: bool,
}

/// A method-table entry with its disambiguation suffix parsed away.
struct MethodEntry<'a> {
    logical_name: &'a str,
    params: &'a [JavaType],
}

/// Synthesize the marshaling wrapper for one non-enum class.
///
/// Overloads sharing a logical name collapse to the first entry in table
/// order; later entries are skipped entirely. A translation failure on any
/// parameter aborts the whole pass with no partial output.
pub fn to_wrapper_class(
    class: &JavaClass,
    ctx: &dyn InterpretContext,
) -> CodegenResult<WrapperDeclaration> {
    if class.is_enum {
        return Err(CodegenError::EnumClass(class.name.clone()));
    }

    let local_name = ctx.local_class_name(&class.name)?;

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut methods = Vec::with_capacity(class.methods.len());

    for (key, method) in &class.methods {
        let entry = MethodEntry {
            logical_name: naming::logical_method_name(key, method.is_override),
            params: &method.params,
        };
        if !emitted.insert(entry.logical_name) {
            // A later overload of a name already emitted.
            continue;
        }
        methods.push(synthesize_method(&entry, ctx)?);
    }

    Ok(WrapperDeclaration {
        name: format!("{local_name}Wrapper"),
        methods,
        is_exported: true,
        is_const: true,
    })
}

/// Build one wrapper entry. Types are translated strictly in positional
/// order (translation may register type usage in shared context state), and
/// every parameter is translated even when the boxed path ends up ignoring
/// the result.
fn synthesize_method(
    entry: &MethodEntry<'_>,
    ctx: &dyn InterpretContext,
) -> CodegenResult<WrapperMethod> {
    let mut coercions = Vec::with_capacity(entry.params.len());
    for param in entry.params {
        let ts_type = ctx.translate_type(param)?;
        let coercion = if param.name.starts_with(BOXED_PREFIX) {
            Coercion::Boxed {
                ctor: param.name.replacen(".lang", "", 1),
            }
        } else {
            Coercion::Hydrate { ts_type }
        };
        coercions.push(coercion);
    }
    Ok(WrapperMethod {
        name: entry.logical_name.to_string(),
        coercions,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::schema::JavaMethod;
    use crate::ts_gen::printer;

    /// Deterministic stand-in for the interpretation context; counts lookups
    /// so tests can assert which collaborators ran.
    struct StubContext {
        calls: RefCell<usize>,
    }

    impl StubContext {
        fn new() -> Self {
            StubContext {
                calls: RefCell::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl InterpretContext for StubContext {
        fn local_class_name(&self, fq_name: &str) -> CodegenResult<String> {
            *self.calls.borrow_mut() += 1;
            Ok(crate::naming::local_class_name(fq_name).to_string())
        }

        fn translate_type(&self, ty: &JavaType) -> CodegenResult<String> {
            *self.calls.borrow_mut() += 1;
            match ty.name.as_str() {
                "java.lang.String" => Ok("string".into()),
                name if name.contains('.') => {
                    Ok(crate::naming::local_class_name(name).to_string())
                }
                name => Err(CodegenError::Translation {
                    type_name: name.to_string(),
                    reason: "unresolved type variable".into(),
                }),
            }
        }
    }

    fn class(name: &str, methods: Vec<(&str, JavaMethod)>) -> JavaClass {
        JavaClass {
            name: name.into(),
            is_enum: false,
            methods: methods
                .into_iter()
                .map(|(k, m)| (k.to_string(), m))
                .collect(),
        }
    }

    fn method(is_override: bool, params: &[&str]) -> JavaMethod {
        JavaMethod {
            is_override,
            params: params.iter().map(|p| JavaType::named(*p)).collect(),
            ret: None,
        }
    }

    #[test]
    fn greeter_with_string_param() {
        let c = class(
            "com.example.Greeter",
            vec![("greet", method(false, &["java.lang.String"]))],
        );
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(decl.name, "GreeterWrapper");
        assert!(decl.is_exported);
        assert!(decl.is_const);
        assert_eq!(
            printer::initializer(&decl),
            "{greet: function(arg0) { return argumentMap(...[java.String(arg0)]) }}"
        );
    }

    #[test]
    fn distinct_names_emit_one_entry_each() {
        let c = class(
            "com.example.Greeter",
            vec![
                ("hello", method(false, &[])),
                ("greet", method(false, &["java.lang.String"])),
                ("farewell", method(false, &["com.example.Point"])),
            ],
        );
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(decl.methods.len(), 3);
        let names: Vec<&str> = decl.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["hello", "greet", "farewell"]);
    }

    #[test]
    fn overloads_collapse_to_first_entry() {
        let c = class(
            "com.example.Greeter",
            vec![
                ("greet@override1@override", method(true, &["java.lang.String"])),
                (
                    "greet@override2@override",
                    method(true, &["java.lang.String", "java.lang.Integer"]),
                ),
                ("greet", method(false, &[])),
            ],
        );
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(decl.methods.len(), 1);
        assert_eq!(decl.methods[0].name, "greet");
        // First entry in table order wins, so the wrapper has arity 1.
        assert_eq!(decl.methods[0].coercions.len(), 1);
    }

    #[test]
    fn zero_param_method_spreads_empty_list() {
        let c = class("com.example.Clock", vec![("now", method(false, &[]))]);
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(
            printer::initializer(&decl),
            "{now: function() { return argumentMap(...[]) }}"
        );
    }

    #[test]
    fn zero_method_class_yields_empty_literal() {
        let c = class("com.example.Marker", vec![]);
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(printer::initializer(&decl), "{}");
    }

    #[test]
    fn hydrate_coercion_for_user_types() {
        let c = class(
            "com.example.Mover",
            vec![("moveTo", method(false, &["com.example.Point"]))],
        );
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(
            printer::initializer(&decl),
            "{moveTo: function(arg0) { return argumentMap(...[arg0 instanceof Point ? arg0 : plainToClass(Point, arg0)]) }}"
        );
    }

    #[test]
    fn boxed_coercion_strips_lang_segment_once() {
        let c = class(
            "com.example.Adder",
            vec![("add", method(false, &["java.lang.Integer", "java.lang.Long"]))],
        );
        let decl = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(
            decl.methods[0].coercions,
            vec![
                Coercion::Boxed { ctor: "java.Integer".into() },
                Coercion::Boxed { ctor: "java.Long".into() },
            ]
        );
        assert_eq!(
            printer::initializer(&decl),
            "{add: function(arg0, arg1) { return argumentMap(...[java.Integer(arg0), java.Long(arg1)]) }}"
        );
    }

    #[test]
    fn enum_input_fails_before_any_lookup() {
        let ctx = StubContext::new();
        let mut c = class("com.example.Color", vec![("values", method(false, &[]))]);
        c.is_enum = true;
        let err = to_wrapper_class(&c, &ctx).unwrap_err();
        assert!(matches!(err, CodegenError::EnumClass(_)));
        assert_eq!(ctx.call_count(), 0);
    }

    #[test]
    fn translation_failure_aborts_whole_pass() {
        let c = class(
            "com.example.Generic",
            vec![
                ("bad", method(false, &["T"])),
                ("fine", method(false, &["java.lang.String"])),
            ],
        );
        let err = to_wrapper_class(&c, &StubContext::new()).unwrap_err();
        assert!(matches!(err, CodegenError::Translation { .. }));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let c = class(
            "com.example.Greeter",
            vec![
                ("greet", method(false, &["java.lang.String"])),
                ("moveTo", method(false, &["com.example.Point"])),
            ],
        );
        let first = to_wrapper_class(&c, &StubContext::new()).unwrap();
        let second = to_wrapper_class(&c, &StubContext::new()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            printer::declaration_source(&first),
            printer::declaration_source(&second)
        );
    }
}
