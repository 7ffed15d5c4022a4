//! # Sugars Name
//!
//! A masked, delimiter-joined name type: an ordered sequence of string
//! components that may themselves contain the delimiter or escape character
//! when properly masked.
//!
//! ## Features
//!
//! - `macros` (default) - The `name!` literal macro
//! - `serde` - `Serialize` / `Deserialize` for [`Name`]
//!
//! ## Masking
//!
//! Components are stored masked: every literal `\` or `.` is preceded by a
//! `\`. Both characters are fixed ([`masking::ESCAPE_CHARACTER`],
//! [`masking::DEFAULT_DELIMITER`]). Each `Name` picks its own delimiter for
//! human-readable output, while the machine-readable form always uses the
//! defaults.
//!
//! ## Example
//!
//! ```rust
//! use sugars_name::{Name, NameError};
//!
//! let mut name = Name::with_delimiter([r"Oh\.\.\.", "yes"], ' ');
//! assert_eq!(name.as_string(), "Oh... yes");
//! assert_eq!(name.as_data_string(), r"Oh\.\.\..yes");
//!
//! name.append("indeed");
//! assert_eq!(name.no_components(), 3);
//! assert!(matches!(name.remove(7), Err(NameError::IndexOutOfRange { .. })));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod builders;
pub mod error;
pub mod name;

#[cfg(feature = "macros")]
pub mod macros;

pub use builders::NameBuilder;
pub use error::{NameError, Result};
pub use name::{masking, Name};
