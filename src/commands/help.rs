use std::sync::Arc;

use crate::commands::COMMANDS;
use crate::core::command::{CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec};
use crate::core::context::ConsoleContext;

pub static SPEC: CommandSpec = CommandSpec {
    id: CommandId::Help,
    name: "help",
    description: "list available commands",
    run,
    pre_check: None,
};

fn run(_ctx: Arc<ConsoleContext>, _input: CommandInput) -> CommandFuture {
    Box::pin(async move { Ok(CommandOutput::Text(render_help())) })
}

/// 从命令表生成两列清单，不手工维护
pub fn render_help() -> String {
    let width = COMMANDS
        .iter()
        .map(|spec| spec.name.len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = COMMANDS
        .iter()
        .copied()
        .map(|spec| format!("{:<width$}  {}", spec.name, spec.description))
        .collect();
    lines.join("\n")
}
