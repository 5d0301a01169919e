//! # rpm-version
//!
//! A library for parsing and ordering RPM package versions.
//!
//! Versions take the form `[epoch:]version[-release]` and are ordered the way rpm orders
//! them: by epoch, then by comparing `version` and `release` segment by segment with the
//! `rpmvercmp` algorithm. Parsing never fails; malformed input is interpreted on a
//! best-effort basis.
//!
//! # Example
//!
//! ```rust
//! use rpm_version::{Dependency, Version, rpmvercmp};
//! use std::cmp::Ordering;
//!
//! let installed = Version::parse("2:7.4.052-1.el6");
//! assert_eq!(installed.epoch(), 2);
//! assert_eq!(installed.version(), "7.4.052");
//! assert_eq!(installed.release(), "1.el6");
//! assert_eq!(installed.to_string(), "2:7.4.052-1.el6");
//!
//! // pre-releases marked with a tilde sort before the final release
//! assert!(Version::parse("1.0~rc1") < Version::parse("1.0"));
//!
//! // bare upstream versions can be compared directly
//! assert_eq!(rpmvercmp("10.0001", "10.1"), Ordering::Equal);
//!
//! let requirement: Dependency = "vim >= 2:7.4".parse()?;
//! assert!(requirement.is_satisfied_by(&installed));
//! # Ok::<(), rpm_version::Error>(())
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

mod constants;
pub use crate::constants::*;

mod version;
pub use crate::version::*;

mod dependency;
pub use crate::dependency::*;
