//! Brewfile manifest parsing.
//!
//! A manifest is plain UTF-8 text, one declaration per line, in the five
//! forms brewlock understands (`tap`, `brew`, `cask`, `mas ... id:`,
//! `vscode`). Parsing is deliberately permissive: unrecognized lines are
//! ignored so manifests using Brewfile features this tool does not snapshot
//! still parse. Strictness lives in reconciliation, where a declared package
//! with no installed state is fatal.

pub mod parser;

pub use parser::{Manifest, StoreApp};
