use log::{debug, log_enabled, trace, Level};

use crate::error::ParseError;
use crate::parser::Parser;
use crate::token::TokenResult;
use crate::{util, LOG_TARGET};

pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;
    fn log_inputs(&self, text: &str, cursor: usize);
    fn log_success(&self, text: &str, cursor: usize, res: &TokenResult);
    fn log_failure(&self, text: &str, cursor: usize, error: &ParseError);
    fn log_sequence(&self, msg: &str, cursor: usize);
}

impl Loggable for Parser {
    fn log_inputs(&self, text: &str, cursor: usize) {
        if log_enabled!(target: LOG_TARGET, Level::Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = self.name(),
                inp = util::formatter_str(util::remaining(text, cursor)),
                operation = format!("match@{cursor}"),
            );
        }
    }

    fn log_success(&self, text: &str, cursor: usize, res: &TokenResult) {
        if log_enabled!(target: LOG_TARGET, Level::Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {res}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = self.name(),
                inp = util::formatter_str(util::remaining(text, res.end())),
                operation = format!("matched@{cursor}"),
            );
        }
    }

    fn log_failure(&self, text: &str, cursor: usize, error: &ParseError) {
        trace!(
            target: LOG_TARGET,
            "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {e}",
            iw = Self::INPUT_WIDTH,
            lw = Self::LABEL_WIDTH,
            label = self.name(),
            inp = util::formatter_str(util::remaining(text, cursor)),
            operation = format!("failed@{cursor}"),
            e = error,
        );
    }

    fn log_sequence(&self, msg: &str, cursor: usize) {
        if log_enabled!(target: LOG_TARGET, Level::Debug) {
            debug!(
                target: LOG_TARGET,
                "{label:<lw$} : {msg}@{cursor}",
                lw = Self::LABEL_WIDTH,
                label = self.name(),
            );
        }
    }
}
