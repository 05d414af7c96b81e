//! Logging utilities
//!
//! Thin helpers over the `log` facade. The library never installs a logger;
//! without one these compile down to a level check.

#![allow(unused)]

const TARGET: &str = "arena";

/// Log an info message
#[inline(always)]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{msg}");
}

/// Log a warning message
#[inline(always)]
pub fn warn(msg: &str) {
    ::log::warn!(target: TARGET, "{msg}");
}

/// Log a debug message with a label
#[inline(always)]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: TARGET, "[{label}] {msg}");
}

/// Log a competitor summary
#[inline(always)]
pub fn state_summary(team: &str, round: u32, health: i32, gold: u32, level: u32, board_count: usize) {
    ::log::debug!(
        target: TARGET,
        "[{team}] round={round} health={health} gold={gold} level={level} board={board_count}"
    );
}

/// Log an action being performed
#[inline(always)]
pub fn action(name: &str, details: &str) {
    ::log::info!(target: TARGET, ">> {name}: {details}");
}

/// Log action result
#[inline(always)]
pub fn result(success: bool, msg: &str) {
    if success {
        ::log::debug!(target: TARGET, "ok: {msg}");
    } else {
        ::log::warn!(target: TARGET, "failed: {msg}");
    }
}
