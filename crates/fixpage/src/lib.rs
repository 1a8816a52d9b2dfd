//! Ordered, literal text patches applied to a single file.
//!
//! A [`Patch`] is a fixed list of [`Replacement`] rules. Rules match exact
//! substrings, and a rule whose source text is absent is a no-op.

pub mod error;
pub mod patch;
pub mod property_page;
pub mod rules;

pub use error::{Error, Result};
pub use patch::{Patch, PatchReport, PatchedContent, WriteMode};
pub use rules::{Guard, Replacement, RuleOutcome};
