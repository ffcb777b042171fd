//! Readers that produce rows of text fields.

pub mod csv;
