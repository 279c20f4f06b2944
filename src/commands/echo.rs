use std::sync::Arc;

use crate::core::command::{CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec};
use crate::core::context::ConsoleContext;

pub static SPEC: CommandSpec = CommandSpec {
    id: CommandId::Echo,
    name: "echo",
    description: "print the arguments back",
    run,
    pre_check: None,
};

fn run(_ctx: Arc<ConsoleContext>, input: CommandInput) -> CommandFuture {
    Box::pin(async move {
        let args = input.args();
        if args.is_empty() {
            Ok(CommandOutput::Silent)
        } else {
            Ok(CommandOutput::Text(args.to_string()))
        }
    })
}
