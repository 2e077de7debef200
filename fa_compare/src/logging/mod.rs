//! Global logging module for the scanner comparison tool
//!
//! Provides a thread-safe global logger, a per-thread session context that
//! tags events with the comparison case being run, and a macro interface.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static SESSION_CONTEXT: RefCell<Option<SessionContext>> = RefCell::new(None);
}

/// Identifies the input currently being compared on this thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub label: String,
    pub case_index: Option<usize>,
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    for code in [
        codes::system::INITIALIZATION_FAILURE,
        codes::comparison::PATTERN_RESULTS_DIFFER,
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
    ] {
        if codes::get_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for code: {}", code));
        }
    }

    logging_service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach a sink
pub fn is_level_enabled(level: LogLevel) -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(level))
        .unwrap_or(false)
}

// ============================================================================
// SESSION CONTEXT MANAGEMENT
// ============================================================================

pub fn set_session_context(label: &str, case_index: Option<usize>) {
    SESSION_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(SessionContext {
            label: label.to_string(),
            case_index,
        });
    });
}

pub fn clear_session_context() {
    SESSION_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with session context
pub fn with_session_context<F, R>(label: &str, case_index: Option<usize>, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_session_context(label, case_index);
    let result = f();
    clear_session_context();
    result
}

pub fn get_current_session_context() -> Option<SessionContext> {
    SESSION_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Tag an event with the current session, if any
pub fn attach_session_context(event: LogEvent) -> LogEvent {
    match get_current_session_context() {
        Some(session) => {
            let event = event.with_context("session", &session.label);
            match session.case_index {
                Some(index) => event.with_context("case", &index.to_string()),
                None => event,
            }
        }
        None => event,
    }
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Build, tag and dispatch an event (used by the logging macros)
pub fn dispatch_event(mut event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };
    if !logger.should_log(event.level) {
        return;
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }
    logger.log_event(attach_session_context(event));
}

pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch_event(LogEvent::error(code, message), context);
}

pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch_event(LogEvent::success(code, message), context);
}

pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch_event(LogEvent::info(message), context);
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Active level: {:?}\n", logger.min_level()));
    }
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}
