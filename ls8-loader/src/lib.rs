//! LS-8 Program Loader
//!
//! Turn program source (one base-2 literal per line) into a [`ls8_spec::Program`].
//!
//! ## Example
//!
//! ```rust
//! use ls8_loader::parse;
//!
//! let source = r#"
//!     10000010 # LDI R0,8
//!     00000000
//!     00001000
//!     00000001 # HLT
//! "#;
//!
//! let program = parse(source).unwrap();
//! assert_eq!(program.len(), 4);
//! ```

pub mod error;
pub mod lexer;
pub mod loader;

pub use error::{LoaderError, Result};
pub use loader::{load_file, load_file_or_empty, parse};
