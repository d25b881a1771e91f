//! Parsing of assertion interface files.
//!
//! An interface file declares one `pub trait {Type}Assertions` whose
//! methods follow a fixed convention:
//!
//! ```rust,ignore
//! fn to_contain_pairs<S, K, V>(&self, subject: &S, pairs: Vec<(K, V)>) -> ReportEntry
//! where
//!     S: MapLike<K, V>,
//!     K: fmt::Debug + PartialEq,
//!     V: fmt::Debug + PartialEq;
//! ```
//!
//! The first generic parameter is the subject type `S`; the first value
//! parameter borrows it (`&S` or `&mut S`); remaining parameters are taken
//! by value; the return type is `ReportEntry`. Anything else is reported as
//! a malformed interface file.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::codegen::scan::INTERFACE_SUFFIX;
use crate::codegen::GenError;

/// A parsed interface file.
#[derive(Debug, Clone)]
pub struct InterfaceFile {
    /// Source path of the interface file.
    pub path: PathBuf,
    /// Module name of the generated companion, e.g. `map_assertions`.
    pub module_name: String,
    /// The interface's type prefix, e.g. `Map`.
    pub type_name: String,
    /// Full trait name, e.g. `MapAssertions`.
    pub trait_name: String,
    /// `use` lines of the source file, in order.
    pub uses: Vec<String>,
    /// Parsed trait methods, in declaration order.
    pub methods: Vec<MethodSig>,
}

/// One parsed trait method.
#[derive(Debug, Clone)]
pub struct MethodSig {
    /// Doc-comment lines preceding the method, verbatim.
    pub docs: Vec<String>,
    /// Method name.
    pub name: String,
    /// Generic parameters after the leading subject parameter `S`.
    pub generics: Vec<String>,
    /// Whether the subject is borrowed mutably.
    pub subject_mutable: bool,
    /// Value parameters after the subject, as `(name, type)` pairs.
    pub params: Vec<(String, String)>,
    /// Where-clause items, split at top level.
    pub where_clause: Vec<String>,
}

/// Parse an interface file from disk.
pub fn parse_interface_file(path: &Path) -> Result<InterfaceFile, GenError> {
    let content = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    parse_interface(path, &content)
}

/// Parse interface file content.
pub fn parse_interface(path: &Path, content: &str) -> Result<InterfaceFile, GenError> {
    let module_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".rs"))
        .unwrap_or_default()
        .to_string();
    let type_name = pascal_case(
        module_name
            .strip_suffix(INTERFACE_SUFFIX.trim_end_matches(".rs"))
            .unwrap_or(&module_name),
    );
    let trait_name = format!("{}Assertions", type_name);

    let uses: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("use ") && line.ends_with(';'))
        .map(str::to_string)
        .collect();

    let file = path.display().to_string();
    let missing_trait = || GenError::MissingTrait {
        file: file.clone(),
        expected: trait_name.clone(),
    };

    let trait_re = Regex::new(&format!(r"pub trait {}\b[^{{]*\{{", trait_name))
        .expect("trait pattern is valid");
    let opening = trait_re.find(content).ok_or_else(missing_trait)?;
    let closing = content.rfind('}').ok_or_else(missing_trait)?;
    if closing <= opening.end() {
        return Err(missing_trait());
    }
    let body = &content[opening.end()..closing];

    let mut methods = Vec::new();
    let mut docs: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;

    for raw in body.lines() {
        let line = raw.trim();

        if let Some(mut sig) = pending.take() {
            sig.push(' ');
            sig.push_str(line);
            if line.ends_with(';') {
                methods.push(parse_method(&file, &docs, &sig)?);
                docs.clear();
            } else {
                pending = Some(sig);
            }
            continue;
        }

        if line.is_empty() {
            docs.clear();
        } else if line.starts_with("///") {
            docs.push(line.to_string());
        } else if line.starts_with("fn ") {
            if line.ends_with(';') {
                methods.push(parse_method(&file, &docs, line)?);
                docs.clear();
            } else {
                pending = Some(line.to_string());
            }
        } else {
            return Err(GenError::MalformedMethod {
                file,
                signature: line.to_string(),
            });
        }
    }
    if let Some(sig) = pending {
        return Err(GenError::MalformedMethod {
            file,
            signature: sig,
        });
    }

    Ok(InterfaceFile {
        path: path.to_path_buf(),
        module_name,
        type_name,
        trait_name,
        uses,
        methods,
    })
}

fn parse_method(file: &str, docs: &[String], raw: &str) -> Result<MethodSig, GenError> {
    let sig = collapse_whitespace(raw);
    let malformed = || GenError::MalformedMethod {
        file: file.to_string(),
        signature: sig.clone(),
    };

    let re = Regex::new(
        r"^fn (?P<name>[a-z][a-z0-9_]*)<(?P<generics>[A-Za-z0-9_, ]+)>\(&self, subject: &(?P<m>mut )?S(?P<rest>.*?)\) -> ReportEntry(?: where (?P<wh>.+))?;$",
    )
    .expect("method pattern is valid");
    let caps = re.captures(&sig).ok_or_else(malformed)?;

    let mut generics: Vec<String> = caps["generics"]
        .split(',')
        .map(|g| g.trim().to_string())
        .collect();
    if generics.first().map(String::as_str) != Some("S") {
        return Err(malformed());
    }
    generics.remove(0);

    let rest = caps.name("rest").map(|m| m.as_str()).unwrap_or("");
    let mut params = Vec::new();
    for item in split_top_level(rest.trim_start_matches(','), ',') {
        let (name, ty) = item.split_once(':').ok_or_else(malformed)?;
        params.push((name.trim().to_string(), ty.trim().to_string()));
    }

    let where_clause = caps
        .name("wh")
        .map(|m| split_top_level(m.as_str(), ','))
        .unwrap_or_default();

    Ok(MethodSig {
        docs: docs.to_vec(),
        name: caps["name"].to_string(),
        generics,
        subject_mutable: caps.name("m").is_some(),
        params,
        where_clause,
    })
}

fn collapse_whitespace(s: &str) -> String {
    let re = Regex::new(r"\s+").expect("whitespace pattern is valid");
    re.replace_all(s.trim(), " ").into_owned()
}

/// Split on a separator at bracket depth zero, skipping `->` arrows.
fn split_top_level(input: &str, sep: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' | '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            '>' | ')' | ']' => {
                depth -= 1;
                current.push(c);
            }
            '-' if chars.peek() == Some(&'>') => {
                current.push('-');
                current.push(chars.next().expect("peeked"));
            }
            _ if c == sep && depth == 0 => {
                if !current.trim().is_empty() {
                    out.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        out.push(current.trim().to_string());
    }
    out
}

fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
