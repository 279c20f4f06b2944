use super::*;

#[test]
fn test_memory_sink_records_in_order() {
    let sink = MemorySink::new();
    sink.println("first");
    sink.println("second");

    assert_eq!(sink.lines(), ["first", "second"]);
}

#[test]
fn test_memory_sink_starts_empty() {
    let sink = MemorySink::new();
    assert!(sink.lines().is_empty());
}

#[test]
fn test_tracing_sink_without_subscriber() {
    // 未安装订阅器时事件被丢弃，不应 panic
    TracingSink.println("dropped");
}
