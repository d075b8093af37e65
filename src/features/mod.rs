//! Feature implementations for smartdo.
//!
//! - Natural language task interpretation
//! - Motivational quotes

pub mod nlp;
pub mod quote;
