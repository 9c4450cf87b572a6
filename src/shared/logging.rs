//! Structured logging module for the social navbar
//!
//! Provides consistent, contextual logging across the application.
//! Uses tracing structured fields keyed by the operation being performed.

use std::path::Path;

/// Operations that emit structured logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SessionResolve,
    UserSearch,
    DirectoryLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionResolve => "session_resolve",
            LogOperation::UserSearch => "user_search",
            LogOperation::DirectoryLoad => "directory_load",
        }
    }
}

/// Log the outcome of resolving the current session
pub fn log_session_resolved(user_id: Option<&str>) {
    match user_id {
        Some(id) => tracing::debug!(
            operation = LogOperation::SessionResolve.as_str(),
            user_id = id,
            "Session resolved"
        ),
        None => tracing::debug!(
            operation = LogOperation::SessionResolve.as_str(),
            "No active session"
        ),
    }
}

/// Log an auth provider failure (distinct from "no session")
pub fn log_session_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::SessionResolve.as_str(),
        error = error,
        "Auth provider failed, rendering anonymous navbar"
    );
}

/// Log a search call leaving the widget after the debounce period
pub fn log_search_issued(query: &str, generation: u64) {
    tracing::debug!(
        operation = LogOperation::UserSearch.as_str(),
        query = query,
        generation = generation,
        "Issuing user search"
    );
}

/// Log a search served by the directory
pub fn log_search_served(query: &str, result_count: usize) {
    tracing::info!(
        operation = LogOperation::UserSearch.as_str(),
        query = query,
        result_count = result_count,
        "User search served"
    );
}

/// Log a search response that arrived after being superseded
pub fn log_search_stale(generation: u64) {
    tracing::debug!(
        operation = LogOperation::UserSearch.as_str(),
        generation = generation,
        "Discarded stale search response"
    );
}

/// Log a failed search call
pub fn log_search_error(query: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::UserSearch.as_str(),
        query = query,
        error = error,
        "User search failed"
    );
}

/// Log the user directory fixture being loaded
pub fn log_directory_loaded(path: &Path, user_count: usize) {
    tracing::info!(
        operation = LogOperation::DirectoryLoad.as_str(),
        path = %path.display(),
        user_count = user_count,
        "User directory loaded"
    );
}
