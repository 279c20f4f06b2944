//! 命令系统：命令标识与命令表类型
//!
//! 架构：
//! - CommandId: 命令标识枚举（内部键，区别于用户输入的显示名）
//! - CommandSpec: 静态命令描述符（显示名、描述、处理器、前置检查）
//! - 生命周期事件名由固定标记 + 命令键拼接派生，对命令单射

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use compact_str::{format_compact, CompactString};

use crate::commands::COMMANDS;
use crate::core::context::ConsoleContext;

/// 命令处理器返回的装箱 Future
pub type CommandFuture =
    Pin<Box<dyn Future<Output = Result<CommandOutput, CommandError>> + Send + 'static>>;

/// 命令处理器：函数指针，便于静态表构造
pub type CommandHandler = fn(Arc<ConsoleContext>, CommandInput) -> CommandFuture;

/// 前置检查：返回 false 时命令静默不执行
pub type PreCheck = fn(&ConsoleContext) -> bool;

const DID_RUN_START: &str = "didRunStart:";
const DID_RUN_FINISH: &str = "didRunFinish:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    Echo,
    Version,
    Sleep,
    Workspace,
    Log,
}

impl CommandId {
    pub const ALL: [CommandId; 6] = [
        CommandId::Help,
        CommandId::Echo,
        CommandId::Version,
        CommandId::Sleep,
        CommandId::Workspace,
        CommandId::Log,
    ];

    /// 内部键（代码级标识，不是用户输入的名字）
    pub fn key(self) -> &'static str {
        match self {
            CommandId::Help => "help",
            CommandId::Echo => "echo",
            CommandId::Version => "version",
            CommandId::Sleep => "sleep",
            CommandId::Workspace => "workspace",
            CommandId::Log => "log",
        }
    }

    /// 全函数：每个标识恰好对应一个描述符
    pub fn spec(self) -> &'static CommandSpec {
        match self {
            CommandId::Help => &crate::commands::help::SPEC,
            CommandId::Echo => &crate::commands::echo::SPEC,
            CommandId::Version => &crate::commands::version::SPEC,
            CommandId::Sleep => &crate::commands::sleep::SPEC,
            CommandId::Workspace => &crate::commands::workspace::SPEC,
            CommandId::Log => &crate::commands::log::SPEC,
        }
    }
}

/// 运行开始事件名
pub fn did_run_start_event(id: CommandId) -> CompactString {
    format_compact!("{}{}", DID_RUN_START, id.key())
}

/// 运行结束事件名
pub fn did_run_finish_event(id: CommandId) -> CompactString {
    format_compact!("{}{}", DID_RUN_FINISH, id.key())
}

/// 静态命令描述符，运行期不可变
pub struct CommandSpec {
    pub id: CommandId,
    pub name: &'static str,
    pub description: &'static str,
    pub run: CommandHandler,
    pub pre_check: Option<PreCheck>,
}

impl CommandSpec {
    /// 按显示名精确匹配（不做前缀或模糊匹配）
    pub fn find_by_name(token: &str) -> Option<&'static CommandSpec> {
        COMMANDS.iter().copied().find(|spec| spec.name == token)
    }
}

/// 传给处理器的原始输入行
#[derive(Debug, Clone)]
pub struct CommandInput {
    raw: String,
}

impl CommandInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// 与 execute 收到的输入完全一致
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 首个空白分隔词之后的剩余部分，去掉前导空白，内部空白保留
    pub fn args(&self) -> &str {
        let trimmed = self.raw.trim_start();
        match trimmed.find(char::is_whitespace) {
            Some(pos) => trimmed[pos..].trim_start(),
            None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Silent,
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    BadArgs {
        name: &'static str,
        reason: String,
    },
    Failed(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BadArgs { name, reason } => write!(f, "{}: {}", name, reason),
            CommandError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CommandError {}
