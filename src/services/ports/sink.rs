/// 用户可见输出的接收端口，由宿主（REPL、TUI、测试）提供实现
pub trait OutputSink: Send + Sync {
    fn println(&self, line: &str);
}
