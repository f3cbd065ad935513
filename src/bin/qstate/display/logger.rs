use std::io::{self, Write};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Installs the stderr logger. `verbosity` counts `-v` flags: warnings are
/// always shown, then info, debug and trace.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level_for(verbosity)))
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = match record.level() {
            Level::Error => "\x1b[31merror\x1b[0m",
            Level::Warn => "\x1b[33mwarn \x1b[0m",
            Level::Info => "\x1b[36minfo \x1b[0m",
            Level::Debug => "\x1b[2mdebug\x1b[0m",
            Level::Trace => "\x1b[2mtrace\x1b[0m",
        };

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "  {tag} {}", record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
