//! 命令执行器：匹配 → 前置检查 → 串行执行 → 生命周期事件
//!
//! 执行流程的不变量：
//! - 开始事件在处理器之前分发，结束事件在处理器落定之后分发（无论成败）
//! - 运行锁公平排队，两次并发执行的事件序列不交错
//! - busy 标志只在持锁期间为 true，锁最后释放

use std::sync::Arc;
use std::time::Instant;

use crate::commands::COMMANDS;
use crate::core::command::{
    did_run_finish_event, did_run_start_event, CommandError, CommandInput, CommandOutput,
    CommandSpec,
};
use crate::core::context::ConsoleContext;

/// 一次 execute 调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// 输入为空或全空白，未发生任何事情
    Skipped,
    /// 首词未匹配任何命令，已向接收器输出一行提示
    NotFound,
    /// 前置检查拒绝，静默
    Vetoed,
    /// 处理器正常完成
    Done(CommandOutput),
}

/// 核心唯一入口：把一行原始输入解析为命令并执行。
/// 处理器失败时结束事件仍会分发，错误原样向上传播。
pub async fn execute(
    ctx: &Arc<ConsoleContext>,
    input: &str,
) -> Result<Execution, CommandError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Execution::Skipped);
    }
    let Some(token) = trimmed.split_whitespace().next() else {
        return Ok(Execution::Skipped);
    };

    let Some(spec) = CommandSpec::find_by_name(token) else {
        report_not_found(ctx, input, token);
        return Ok(Execution::NotFound);
    };

    if let Some(check) = spec.pre_check {
        if !check(ctx) {
            tracing::debug!(command = spec.name, "precondition rejected command");
            return Ok(Execution::Vetoed);
        }
    }

    let _running = ctx.run_lock().lock().await;
    ctx.set_running(true);
    tracing::debug!(command = spec.name, input = %input, "executing command");

    let payload = Some(input.to_string());
    let started = Instant::now();

    ctx.events().dispatch(&did_run_start_event(spec.id), &payload);
    let result = (spec.run)(Arc::clone(ctx), CommandInput::new(input)).await;
    ctx.events().dispatch(&did_run_finish_event(spec.id), &payload);

    ctx.set_running(false);

    let elapsed_ms = started.elapsed().as_millis() as u64;
    if elapsed_ms > ctx.config().slow_warn_ms {
        tracing::warn!(command = spec.name, elapsed_ms, "slow command");
    }
    if let Err(err) = &result {
        tracing::debug!(command = spec.name, error = %err, "command failed");
    }

    result.map(Execution::Done)
}

fn report_not_found(ctx: &Arc<ConsoleContext>, input: &str, token: &str) {
    let mut line = format!("command not found: {}", input);
    if ctx.config().suggest_on_not_found {
        if let Some(name) = closest_name(token) {
            line.push_str(&format!(" (did you mean `{}`?)", name));
        }
    }
    // 未知命令是唯一用户可见的失败：恰好一行
    ctx.sink().println(&line);
    tracing::debug!(input = %input, "command not found");
}

fn closest_name(token: &str) -> Option<&'static str> {
    let token = token.to_ascii_lowercase();
    COMMANDS
        .iter()
        .copied()
        .map(|spec| spec.name)
        .find(|name| name.starts_with(token.as_str()) || token.starts_with(name))
}

#[cfg(test)]
#[path = "../../tests/unit/core/executor.rs"]
mod tests;
