//! # sass-variables-core
//!
//! Extracts variable declarations from SCSS source into a structured mapping
//! that serializes straight to JSON.
//!
//! ```text
//! Source → strip comments → line scanner → declarations → list resolver → VariableMap
//!                                                          (nested matcher)
//! ```
//!
//! ## Modules
//!
//! - [`matcher`] - finds top-level spans between an opener and a closer,
//!   e.g. everything inside balanced parentheses
//! - [`resolver`] - turns a value into a scalar, a list, or a nested list
//! - [`extractor`] - reassembles multi-line `$name: value;` declarations
//! - [`comments`] - blanks out `//` and `/* */` comments
//! - [`case`] - camel-case aliases for variable names
//!
//! ## Quick Start
//!
//! ```
//! use sass_variables_core::{extract, ResolvedValue};
//!
//! let variables = extract("$brand-color: #0af !default;\n$sizes: (1, 2, 3);\n");
//!
//! assert_eq!(variables.get("brand-color"), Some(&ResolvedValue::from("#0af")));
//! assert_eq!(variables.get("brandColor"), Some(&ResolvedValue::from("#0af")));
//! assert_eq!(
//!     variables.get("sizes"),
//!     Some(&ResolvedValue::List(vec!["1".into(), "2".into(), "3".into()]))
//! );
//! ```
//!
//! Nothing here touches the filesystem; callers read the source and decide
//! what to do with the result.

pub mod case;
pub mod comments;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod resolver;
pub mod variables;

pub use case::to_camel_case;
pub use comments::strip_comments;
pub use error::ConfigurationError;
pub use extractor::{Declaration, DeclarationScanner, extract};
pub use matcher::{Delimiters, match_recursive};
pub use resolver::resolve;
pub use variables::{ResolvedValue, VariableMap};
