//! Service adapters: OS specific implementations (IO/paths/output).

pub mod settings;
pub mod sink;

pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    read_settings,
};
pub use sink::{MemorySink, StdoutSink, TracingSink};
