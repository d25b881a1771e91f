//! Rendering of generated glue files.
//!
//! Every interface method becomes an inherent method on
//! `Expectation<S>` that forwards the subject and the remaining arguments
//! to the interface's default implementation, resolved through the global
//! registry. Rendering is pure string building, so `check` mode can compare
//! without touching the filesystem.

use crate::codegen::parse::{InterfaceFile, MethodSig};

/// Marker header at the top of every generated file.
pub const GENERATED_HEADER: &str = "\
//---------------------------------------------------
//  Generated content, modify:
//  src/codegen/emit.rs
//  if necessary - enjoy the day 🙂
//---------------------------------------------------
";

/// Render the glue file for one parsed interface.
pub fn render_glue(file: &InterfaceFile) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push('\n');

    for use_line in &file.uses {
        out.push_str(use_line);
        out.push('\n');
    }
    out.push('\n');

    let mut glue_uses = vec![
        "use crate::expect::Expectation;".to_string(),
        format!(
            "use crate::logic::default::Default{}Assertions;",
            file.type_name
        ),
        format!("use crate::logic::{}::{};", file.module_name, file.trait_name),
        "use crate::logic::registry;".to_string(),
    ];
    glue_uses.sort();
    glue_uses.retain(|line| !file.uses.contains(line));
    for line in &glue_uses {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("impl<S> Expectation<S> {\n");
    for (i, method) in file.methods.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_method(file, method, &mut out);
    }
    out.push_str("}\n");
    out
}

/// Render the wiring `mod.rs` listing the generated modules.
pub fn render_mod(modules: &[String]) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push('\n');
    for module in modules {
        out.push_str(&format!("pub mod {};\n", module));
    }
    out
}

fn render_method(file: &InterfaceFile, method: &MethodSig, out: &mut String) {
    for doc in &method.docs {
        out.push_str("    ");
        out.push_str(doc);
        out.push('\n');
    }

    let generics = if method.generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", method.generics.join(", "))
    };
    let receiver = if method.subject_mutable { "mut self" } else { "self" };
    let params: String = method
        .params
        .iter()
        .map(|(name, ty)| format!(", {}: {}", name, ty))
        .collect();
    out.push_str(&format!(
        "    pub fn {}{}({}{}) -> Self\n",
        method.name, generics, receiver, params
    ));

    if !method.where_clause.is_empty() {
        out.push_str("    where\n");
        for item in &method.where_clause {
            out.push_str(&format!("        {},\n", item));
        }
    }

    let subject_expr = if method.subject_mutable {
        "self.subject_mut()"
    } else {
        "self.subject()"
    };
    let args: String = method
        .params
        .iter()
        .map(|(name, _)| format!(", {}", name))
        .collect();
    out.push_str("    {\n");
    out.push_str(&format!(
        "        let entry: ReportEntry = registry::get_or_default::<Default{}Assertions>()\n",
        file.type_name
    ));
    out.push_str(&format!(
        "            .{}({}{});\n",
        method.name, subject_expr, args
    ));
    out.push_str("        self.record(entry)\n");
    out.push_str("    }\n");
}
