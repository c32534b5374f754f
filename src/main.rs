use lsh::io_adapters::{EditorSource, LineSource, PlainSource};
use lsh::{Config, Interpreter, Stop};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config: Config = argh::from_env();
    lsh::logging::init(config.verbose);

    match run(&config) {
        Ok(stop) => {
            log::debug!("stopped: {stop:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("lsh: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<Stop> {
    let mut interpreter = Interpreter::with_config(config);
    let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(PlainSource::new(io::stdin().lock(), io::stdout()))
    };

    interpreter.repl(source.as_mut(), &mut io::stdout(), &mut io::stderr())
}
