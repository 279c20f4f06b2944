//! 调度上下文：命令核心的全部共享状态
//!
//! 显式上下文取代全局量，每个测试各建一份。
//! busy 标志是唯一的可变共享执行状态，只由执行器改写。

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::core::event::EventHub;
use crate::services::ports::{ConsoleConfig, OutputSink};

/// 生命周期事件载荷：真实分发为 Some(原始输入)，订阅时的初始触发为 None
pub type RunPayload = Option<String>;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub workspace_root: Option<PathBuf>,
}

pub struct ConsoleContext {
    events: EventHub<RunPayload>,
    run_lock: tokio::sync::Mutex<()>,
    running: AtomicBool,
    session: RwLock<SessionState>,
    sink: Arc<dyn OutputSink>,
    config: ConsoleConfig,
}

impl ConsoleContext {
    pub fn new(config: ConsoleConfig, sink: Arc<dyn OutputSink>) -> Arc<Self> {
        Arc::new(Self {
            events: EventHub::new(),
            run_lock: tokio::sync::Mutex::new(()),
            running: AtomicBool::new(false),
            session: RwLock::new(SessionState::default()),
            sink,
            config,
        })
    }

    pub fn events(&self) -> &EventHub<RunPayload> {
        &self.events
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn sink(&self) -> &dyn OutputSink {
        self.sink.as_ref()
    }

    /// 当前是否有命令在执行
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }

    pub(crate) fn run_lock(&self) -> &tokio::sync::Mutex<()> {
        &self.run_lock
    }

    pub fn session(&self) -> SessionState {
        self.session.read().expect("session lock poisoned").clone()
    }

    pub fn workspace_root(&self) -> Option<PathBuf> {
        self.session().workspace_root
    }

    pub fn attach_workspace(&self, root: impl Into<PathBuf>) {
        let root = root.into();
        tracing::info!(root = %root.display(), "workspace attached");
        self.session
            .write()
            .expect("session lock poisoned")
            .workspace_root = Some(root);
    }

    pub fn detach_workspace(&self) {
        self.session
            .write()
            .expect("session lock poisoned")
            .workspace_root = None;
    }
}
