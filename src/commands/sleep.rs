use std::sync::Arc;
use std::time::Duration;

use crate::core::command::{
    CommandError, CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec,
};
use crate::core::context::ConsoleContext;

pub static SPEC: CommandSpec = CommandSpec {
    id: CommandId::Sleep,
    name: "sleep",
    description: "suspend for the given milliseconds",
    run,
    pre_check: None,
};

fn run(_ctx: Arc<ConsoleContext>, input: CommandInput) -> CommandFuture {
    Box::pin(async move {
        let args = input.args();
        let ms: u64 = args.parse().map_err(|_| CommandError::BadArgs {
            name: "sleep",
            reason: format!("expected milliseconds, got `{}`", args),
        })?;
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(CommandOutput::Silent)
    })
}
