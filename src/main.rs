use std::io::{self, BufRead, Write};
use std::sync::Arc;

use zconsole::core::command::CommandOutput;
use zconsole::core::context::ConsoleContext;
use zconsole::core::executor::{self, Execution};
use zconsole::logging;
use zconsole::services::adapters::{ensure_settings_file, load_settings, StdoutSink};
use zconsole::services::ports::ConsoleConfig;

fn create_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .or_else(|_| {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
        })
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let mut config = ConsoleConfig::default();
    if let Some(settings) = load_settings() {
        config = config.with_settings(&settings);
    }

    let runtime = create_runtime()?;
    let context = ConsoleContext::new(config, Arc::new(StdoutSink));
    if let Ok(cwd) = std::env::current_dir() {
        context.attach_workspace(cwd);
    }

    println!(
        "zconsole {} (type `help` for commands, `exit` to quit)",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\n', '\r']);
        if input.trim() == "exit" {
            break;
        }

        match runtime.block_on(executor::execute(&context, input)) {
            Ok(Execution::Done(CommandOutput::Text(text))) => println!("{}", text),
            Ok(_) => {}
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}
