//! Fluent assertion API.
//!
//! This module provides the `expect()` entry point and the chainable
//! [`Expectation`] builder. Assertions are recorded while chaining and
//! evaluated as a group when the chain is finished: `verify()` panics on
//! failure, `evaluate()` returns the report for inspection.
//!
//! # Example
//!
//! ```rust
//! use attest::{entries, expect};
//! use std::collections::HashMap;
//!
//! let scores: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//!
//! // Panics on failure
//! expect(&scores).to_contain_pairs(entries! {"a" => 1}).verify();
//!
//! // Non-panicking evaluation
//! let report = expect(&scores).to_contain_pairs(entries! {"a" => 9}).evaluate();
//! assert!(!report.passed());
//! ```

pub mod matchers;
mod subject;

pub use matchers::value_match;
pub use subject::{expect, Expectation};
