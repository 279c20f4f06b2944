use std::sync::Arc;

use crate::core::command::{
    CommandError, CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec,
};
use crate::core::context::ConsoleContext;

pub static SPEC: CommandSpec = CommandSpec {
    id: CommandId::Log,
    name: "log",
    description: "emit a log record: log <level> <message>",
    run,
    pre_check: None,
};

fn run(_ctx: Arc<ConsoleContext>, input: CommandInput) -> CommandFuture {
    Box::pin(async move {
        let args = input.args();
        let (level, message) = match args.find(char::is_whitespace) {
            Some(pos) => (&args[..pos], args[pos..].trim_start()),
            None => (args, ""),
        };
        match level {
            "trace" => tracing::trace!(%message, "console log"),
            "debug" => tracing::debug!(%message, "console log"),
            "info" => tracing::info!(%message, "console log"),
            "warn" => tracing::warn!(%message, "console log"),
            "error" => tracing::error!(%message, "console log"),
            _ => {
                return Err(CommandError::BadArgs {
                    name: "log",
                    reason: format!("unknown level `{}`", level),
                })
            }
        }
        Ok(CommandOutput::Silent)
    })
}
