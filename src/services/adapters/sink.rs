use std::sync::Mutex;

use crate::services::ports::OutputSink;

/// REPL 场景：直接写标准输出
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn println(&self, line: &str) {
        println!("{}", line);
    }
}

/// 嵌入场景：宿主不接管输出时转投 tracing
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn println(&self, line: &str) {
        tracing::info!(target: "zconsole::console", "{}", line);
    }
}

/// 记录每一行，测试用
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }
}

impl OutputSink for MemorySink {
    fn println(&self, line: &str) {
        self.lines
            .lock()
            .expect("sink lock poisoned")
            .push(line.to_string());
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/sink.rs"]
mod tests;
