//! population-cli
//! ==============
//!
//! Command-line interface for the `population-core` lookup crate.
//!
//! This crate primarily provides a binary (`population-cli`). The library
//! target exists so docs.rs renders this overview.
//!
//! ```text
//! population-cli lookup de
//! population-cli a3 deu
//! population-cli stats
//! ```
//!
//! For programmatic access use [`population-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
