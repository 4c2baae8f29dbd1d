// Serde types matching the Java reflection exporter's JSON dump.

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level metadata file wrapper.
#[derive(Deserialize)]
pub struct MetadataFile {
    pub classes: Vec<JavaClass>,
}

/// One reflected Java type (class or enum).
#[derive(Deserialize, Clone)]
pub struct JavaClass {
    /// Fully-qualified name, e.g. "com.example.Greeter".
    pub name: String,
    #[serde(default, rename = "isEnum")]
    pub is_enum: bool,
    /// Method table. Keys are method names, possibly carrying an
    /// "@override" disambiguation suffix for overloads. The JSON object
    /// order is the declaration order and must be preserved.
    #[serde(default)]
    pub methods: IndexMap<String, JavaMethod>,
}

/// One overload of a reflected method.
#[derive(Deserialize, Clone)]
pub struct JavaMethod {
    /// True when the map key was suffixed to disambiguate an overload.
    #[serde(default, rename = "isOverride")]
    pub is_override: bool,
    /// Positional formal parameters.
    #[serde(default)]
    pub params: Vec<JavaType>,
    /// Return type, when the exporter recorded one.
    #[serde(default)]
    pub ret: Option<JavaType>,
}

/// A reference to a Java type. `name` is the fully-qualified type name
/// ("java.lang.String", "com.example.Point", or a primitive like "int").
#[derive(Deserialize, Clone)]
pub struct JavaType {
    pub name: String,
    /// Generic arguments, e.g. the element type of java.util.List<T>.
    #[serde(default, rename = "typeArgs")]
    pub type_args: Vec<JavaType>,
}

impl JavaType {
    /// Convenience constructor for a non-generic type reference.
    pub fn named(name: impl Into<String>) -> Self {
        JavaType {
            name: name.into(),
            type_args: Vec::new(),
        }
    }
}
