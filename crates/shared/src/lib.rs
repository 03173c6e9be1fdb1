//! Data model, catalog wire format and error taxonomy shared by the reading
//! engine and its front ends.

pub mod domain;
pub mod error;
pub mod protocol;
