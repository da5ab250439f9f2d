use colog::format::CologStyle;
use env_logger::Builder;
use log::{Level, LevelFilter};

struct SolverStyle;

impl CologStyle for SolverStyle {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        }
    }
}

pub struct Logger;

impl Logger {
    pub fn init(verbosity: LevelFilter) {
        let mut builder = Builder::new();
        builder.format(colog::formatter(SolverStyle));
        builder.filter(None, verbosity);
        builder.parse_default_env();
        builder.init();
    }
}
