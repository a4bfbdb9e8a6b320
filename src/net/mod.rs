//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every server endpoint with typed helpers; `types` defines the
//! shared wire schema. The API server itself is an external collaborator.

pub mod api;
pub mod types;
