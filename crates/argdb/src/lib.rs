#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `argdb` is the typed argument database consulted by the build tool's
//! components. Values arrive as command-line tokens (`-debugLevel=3`) or
//! programmatic assignments and are looked up by key. Components that own a
//! key register an [`ArgDescriptor`] for it so raw text is converted and
//! validated before anyone reads it.
//!
//! # Design
//!
//! - [`ConfigSource`] is the two-method contract consumers depend on:
//!   `lookup` and `register_type`.
//! - [`ArgDatabase`] is the in-memory implementation backed by sorted maps.
//! - [`ArgValue`] is the dynamic value model shared by both.
//!
//! # Errors
//!
//! [`ArgError`] reports out-of-range integers, non-integer text for integer
//! keys, and malformed command-line tokens.
//!
//! # Examples
//!
//! ```
//! use argdb::{ArgDatabase, ArgDescriptor, ArgValue, ConfigSource};
//!
//! let mut db = ArgDatabase::from_args(["-debugSections=[compile,link]"])?;
//! db.register_type("debugLevel", ArgDescriptor::int("verbosity", 0, 0, 5));
//! db.register_type("debugSections", ArgDescriptor::free("sections"));
//!
//! assert_eq!(db.lookup("debugLevel"), Some(ArgValue::Int(0)));
//! assert_eq!(
//!     db.lookup("debugSections"),
//!     Some(ArgValue::List(vec!["compile".into(), "link".into()]))
//! );
//! assert!(db.set("debugLevel", 9).is_err());
//! # Ok::<(), argdb::ArgError>(())
//! ```

mod database;
mod descriptor;
mod error;
mod source;
mod value;

pub use database::ArgDatabase;
pub use descriptor::ArgDescriptor;
pub use error::ArgError;
pub use source::ConfigSource;
pub use value::ArgValue;
