//! Injected log sinks for systems that report per-tick diagnostics.
//!
//! Systems write through a `DamageLog` instead of calling the `log`
//! macros directly, so tests can capture exactly what a tick reported
//! without installing a global logger.

use std::fmt;

use log::Level;

/// Log target used by `LogSink`.
pub const DAMAGE_TARGET: &str = "battleship::damage";

/// Destination for damage diagnostics.
pub trait DamageLog {
    fn debug(&mut self, args: fmt::Arguments<'_>);
    fn info(&mut self, args: fmt::Arguments<'_>);
}

/// Forwards to the `log` facade. Whatever logger the binary installed
/// (e.g. `env_logger`) decides what is printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DamageLog for LogSink {
    fn debug(&mut self, args: fmt::Arguments<'_>) {
        log::debug!(target: DAMAGE_TARGET, "{args}");
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        log::info!(target: DAMAGE_TARGET, "{args}");
    }
}

/// Keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub lines: Vec<(Level, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines logged at exactly `level`.
    pub fn at(&self, level: Level) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .filter(move |(l, _)| *l == level)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DamageLog for RecordingSink {
    fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.lines.push((Level::Debug, args.to_string()));
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        self.lines.push((Level::Info, args.to_string()));
    }
}
