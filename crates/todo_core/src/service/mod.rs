//! Core use-case services.
//!
//! # Responsibility
//! - Bind the owned todo state to a persistent store.
//! - Keep front-ends decoupled from storage details.

pub mod todo_service;
