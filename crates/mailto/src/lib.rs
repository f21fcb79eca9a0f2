//! # mailto
//!
//! Parsing and serialization of `mailto:` URIs (RFC 6068).
//!
//! ## Features
//!
//! - **Lenient parsing**: Malformed escapes stay literal, tokens without `=`
//!   are skipped, values may contain `=`
//! - **Ordered storage**: Repeated fields are kept in source order
//! - **Recipient aggregation**: The address segment and every `to=` field are
//!   joined into one recipient list
//! - **Canonical output**: `mailto:?to=...&cc=...&subject=...&body=...&`
//!   with uppercase percent-encoding
//!
//! ## Quick Start
//!
//! ### Parsing
//!
//! ```
//! use mailto::MailTo;
//!
//! let mailto = MailTo::parse(
//!     "mailto:infobot@example.com?subject=current-issue&body=send%20index",
//! )?;
//!
//! assert_eq!(mailto.to().as_deref(), Some("infobot@example.com"));
//! assert_eq!(mailto.subject(), Some("current-issue"));
//! assert_eq!(mailto.body(), Some("send index"));
//! # Ok::<(), mailto::Error>(())
//! ```
//!
//! ### Detection
//!
//! ```
//! assert!(mailto::is_mailto("MAILTO:joe@example.com"));
//! assert!(!mailto::is_mailto("http://example.com"));
//! ```
//!
//! ### Serialization
//!
//! ```
//! use mailto::MailTo;
//!
//! let mailto = MailTo::parse("mailto:chris@example.com")?;
//! assert_eq!(mailto.to_string(), "mailto:?to=chris%40example.com&");
//! # Ok::<(), mailto::Error>(())
//! ```
//!
//! ### Building
//!
//! ```
//! use mailto::MailToBuilder;
//!
//! let mailto = MailToBuilder::new()
//!     .to("joe@example.com")
//!     .cc("bob@example.com")
//!     .body("hello")
//!     .build();
//!
//! assert_eq!(mailto.cc(), Some("bob@example.com"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod builder;
mod error;
mod header;
mod mailto;

pub mod encoding;

pub use builder::MailToBuilder;
pub use error::{Error, Result};
pub use header::{HeaderEntry, Headers};
pub use mailto::{MailTo, is_mailto, names};
