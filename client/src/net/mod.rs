//! Network layer: REST helpers for the content API.

pub mod api;
