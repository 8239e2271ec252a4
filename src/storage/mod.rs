//! # Storage Module
//!
//! Persistence for the expense tracker: the trait seam the domain layer
//! depends on, and the flat-file backend that implements it.

pub mod flatfile;
pub mod traits;

pub use flatfile::*;
pub use traits::*;
