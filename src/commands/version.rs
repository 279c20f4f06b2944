use std::sync::Arc;

use crate::core::command::{CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec};
use crate::core::context::ConsoleContext;

pub static SPEC: CommandSpec = CommandSpec {
    id: CommandId::Version,
    name: "version",
    description: "show the console version",
    run,
    pre_check: None,
};

fn run(_ctx: Arc<ConsoleContext>, _input: CommandInput) -> CommandFuture {
    Box::pin(async move { Ok(CommandOutput::Text(env!("CARGO_PKG_VERSION").to_string())) })
}
