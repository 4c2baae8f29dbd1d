// Name utilities for codegen.

/// Marker suffix the metadata exporter appends to disambiguate overload keys.
pub const OVERRIDE_MARKER: &str = "@override";

/// Derive the logical method name from a raw method-table key.
/// Override keys carry the "@override" marker; everything from its first
/// occurrence onward is disambiguation noise ("greet@override1" -> "greet").
/// Non-override keys are used unchanged.
pub fn logical_method_name(key: &str, is_override: bool) -> &str {
    if !is_override {
        return key;
    }
    match key.find(OVERRIDE_MARKER) {
        Some(idx) => &key[..idx],
        None => key,
    }
}

/// Extract the local (unqualified) class name from a fully-qualified Java
/// name: "com.example.Greeter" -> "Greeter". Inner-class separators are
/// handled too: "com.example.Outer$Inner" -> "Inner".
pub fn local_class_name(fq_name: &str) -> &str {
    let tail = match fq_name.rfind('.') {
        Some(idx) => &fq_name[idx + 1..],
        None => fq_name,
    };
    match tail.rfind('$') {
        Some(idx) => &tail[idx + 1..],
        None => tail,
    }
}
