//! Foundation types for inline value annotation.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/character positions as reported by the host
//! - [`text_utils`] - Identifier scanning within a single source line
//!
//! This module has NO dependencies on other crate modules.

mod position;
pub mod text_utils;

pub use position::{Position, Span};
