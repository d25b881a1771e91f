//! # attest
//!
//! A fluent assertion library with grouped evaluation and rich failure
//! reports.
//!
//! Assertions are recorded while chaining and evaluated together when the
//! chain finishes: `verify()` panics with a rendered failure tree,
//! `evaluate()` returns the report for inspection. Grouped assertions are
//! all evaluated, so one failure never hides another.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{entries, expect};
//! use std::collections::HashMap;
//!
//! let scores: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//!
//! expect(&scores)
//!     .to_contain_pairs(entries! {"b" => 2, "a" => 1})
//!     .to_contain_key("a")
//!     .verify();
//! ```
//!
//! ## Entry and iterator assertions
//!
//! ```rust
//! use attest::expect;
//!
//! expect(("a", 1))
//!     .key(|k| k.to_equal("a"))
//!     .value(|v| v.to_equal(1))
//!     .verify();
//!
//! expect([1, 2].into_iter().peekable()).to_have_next().verify();
//! ```
//!
//! ## Inspecting failures
//!
//! ```rust
//! use attest::{entries, expect};
//! use std::collections::HashMap;
//!
//! let scores: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
//!
//! let report = expect(&scores)
//!     .to_contain_pairs(entries! {"a" => 9})
//!     .evaluate();
//! assert!(!report.passed());
//! ```
//!
//! The fluent methods for maps, entries, and iterators are generated glue
//! over the interfaces in [`logic`]; see `src/logic/gen/` and the `attest`
//! binary (`attest generate`).

pub mod expect;
pub mod logic;
pub mod report;

#[cfg(feature = "codegen")]
pub mod codegen;
#[cfg(feature = "codegen")]
pub mod config;

// Core types
pub use expect::{expect, value_match, Expectation};
pub use report::{DetailMode, Report, ReportConfig, ReportEntry, ReportFormatter};

// Logic layer
pub use logic::registry;
pub use logic::{EntryLike, MapLike, PeekNext};
