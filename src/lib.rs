//! zconsole - 终端命令调度核心库
//!
//! 模块结构：
//! - core: 核心框架（EventHub, CommandId, Executor, Facade）
//! - commands: 内置命令表（help, echo, version, sleep, workspace, log）
//! - services: 服务层（ports + adapters：输出接收器、配置、路径）
//! - logging: tracing 初始化（滚动日志文件 + panic hook）

pub mod commands;
pub mod core;
pub mod logging;
pub mod services;
