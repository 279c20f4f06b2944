use std::sync::Arc;

use crate::core::command::{CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec};
use crate::core::context::ConsoleContext;

pub static SPEC: CommandSpec = CommandSpec {
    id: CommandId::Workspace,
    name: "workspace",
    description: "show the attached workspace root",
    run,
    pre_check: Some(attached),
};

fn attached(ctx: &ConsoleContext) -> bool {
    ctx.workspace_root().is_some()
}

fn run(ctx: Arc<ConsoleContext>, _input: CommandInput) -> CommandFuture {
    Box::pin(async move {
        // 前置检查与执行之间会话可能变化，这里再取一次
        match ctx.workspace_root() {
            Some(root) => Ok(CommandOutput::Text(root.display().to_string())),
            None => Ok(CommandOutput::Silent),
        }
    })
}
