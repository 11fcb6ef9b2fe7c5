#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::needless_return)]

//! Recursive numeric variants and visitor dispatch.
//!
//! A [`Number`] is an integer, a single or double precision float, or a
//! [`Sequence`] of further numbers. [`dispatch`] hands the active alternative to
//! the matching case of a [`Visitor`]; recursion into sequences is left to the
//! visitor itself.
//!
//! ```
//! use vnum::{printer::print_to_string, Number};
//!
//! let number = Number::sequence([
//!     Number::from(1),
//!     Number::from(2.0f64),
//!     Number::from(3.0f32),
//! ]);
//! assert_eq!(print_to_string(&number).unwrap(), "1i\n2d\n3f\n");
//! ```

pub use number::{Number, NumberKind, Recursive, Sequence};
pub use visit::{dispatch, Visitable, Visitor};

pub mod config;
pub mod error;
pub mod number;
pub mod parse;
pub mod printer;
pub mod visit;
pub mod visitors;
