//! 内置命令表
//!
//! 每个命令一个子模块，描述符在此汇总成静态表。
//! 表序即 help 的列出顺序。

pub mod echo;
pub mod help;
pub mod log;
pub mod sleep;
pub mod version;
pub mod workspace;

use crate::core::command::CommandSpec;

pub static COMMANDS: &[&CommandSpec] = &[
    &help::SPEC,
    &echo::SPEC,
    &version::SPEC,
    &sleep::SPEC,
    &workspace::SPEC,
    &log::SPEC,
];

#[cfg(test)]
#[path = "../../tests/unit/commands/builtins.rs"]
mod tests;
