//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own content storage concerns so route handlers can stay
//! focused on protocol translation.

pub mod content;
