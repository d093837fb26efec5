//! Core types used throughout llmwrap

pub mod message;
pub mod response;
pub mod tool;
