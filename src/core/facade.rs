//! 命令门面：按需构建、进程内缓存的命令包装
//!
//! 构建无副作用，只打包标识与上下文；同一标识两次请求返回同一实例。

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::core::command::{
    did_run_finish_event, did_run_start_event, CommandError, CommandId,
};
use crate::core::context::{ConsoleContext, RunPayload};
use crate::core::event::{SubscribeOptions, Subscription};
use crate::core::executor::{self, Execution};

pub struct CommandFacade {
    id: CommandId,
    context: Arc<ConsoleContext>,
}

impl CommandFacade {
    fn new(id: CommandId, context: Arc<ConsoleContext>) -> Self {
        Self { id, context }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.spec().name
    }

    pub fn description(&self) -> &'static str {
        self.id.spec().description
    }

    pub async fn run(&self) -> Result<Execution, CommandError> {
        self.run_with("").await
    }

    /// 显示名与参数拼接成完整输入行后交给执行器
    pub async fn run_with(&self, args: &str) -> Result<Execution, CommandError> {
        let name = self.id.spec().name;
        let input = if args.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, args)
        };
        executor::execute(&self.context, &input).await
    }

    /// 订阅本命令的开始事件。回调立即以 None 载荷同步触发一次，
    /// 之后每次真实分发收到 Some(完整输入)。
    pub fn on_did_run_start<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&RunPayload) + Send + Sync + 'static,
    {
        self.context.events().subscribe_with(
            &did_run_start_event(self.id),
            SubscribeOptions { initial: Some(None) },
            callback,
        )
    }

    /// 订阅本命令的结束事件，初始触发语义同上
    pub fn on_did_run_finish<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&RunPayload) + Send + Sync + 'static,
    {
        self.context.events().subscribe_with(
            &did_run_finish_event(self.id),
            SubscribeOptions { initial: Some(None) },
            callback,
        )
    }
}

/// 门面注册表：id → 门面的惰性缓存，持有上下文
pub struct FacadeRegistry {
    context: Arc<ConsoleContext>,
    facades: Mutex<FxHashMap<CommandId, Arc<CommandFacade>>>,
}

impl FacadeRegistry {
    pub fn new(context: Arc<ConsoleContext>) -> Self {
        Self {
            context,
            facades: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn context(&self) -> &Arc<ConsoleContext> {
        &self.context
    }

    /// 首次请求构建并缓存，之后返回同一实例
    pub fn facade(&self, id: CommandId) -> Arc<CommandFacade> {
        let mut facades = self.facades.lock().expect("facade cache lock poisoned");
        let facade = facades
            .entry(id)
            .or_insert_with(|| Arc::new(CommandFacade::new(id, Arc::clone(&self.context))));
        Arc::clone(facade)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/facade.rs"]
mod tests;
