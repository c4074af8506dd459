use chainsh::error::ShellError;
use chainsh::flags::Flags;
use chainsh::shell::Shell;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn run(program: &str, args: &[String]) -> Result<i32, ShellError> {
    let mut flags = Flags::new();
    flags.parse(args)?;

    if flags.is_set("help") {
        flags.print_help(program);
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("chainsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let mut shell = Shell::from_flags(program, &flags)?;
    shell.run()
}

fn main() -> ExitCode {
    init_logging();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "chainsh".to_string());
    let args: Vec<String> = args.collect();

    let status = match run(&program, &args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{}: {}", program, e);
            e.exit_status()
        }
    };

    ExitCode::from((status & 0xFF) as u8)
}
