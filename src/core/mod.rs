//! 核心框架模块
//!
//! 提供命令调度核心的抽象：
//! - Event: 字符串键控的同步事件中心（发布/订阅）
//! - Command: 命令标识、命令表与命令类型
//! - Executor: 命令执行器（匹配 → 前置检查 → 串行执行 → 生命周期事件）
//! - Facade: 按需构建并缓存的命令门面
//! - Context: 调度上下文（事件中心、互斥锁、会话状态）

pub mod command;
pub mod context;
pub mod event;
pub mod executor;
pub mod facade;

pub use command::{
    CommandError, CommandFuture, CommandId, CommandInput, CommandOutput, CommandSpec,
};
pub use context::{ConsoleContext, RunPayload, SessionState};
pub use event::{EventHub, SubscribeOptions, Subscription};
pub use executor::{execute, Execution};
pub use facade::{CommandFacade, FacadeRegistry};
