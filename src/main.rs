use colored::Colorize;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use zone_summary::cli::{run, CommandLine};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    let args = CommandLine::parse_args();
    log::info!("#Start main()");

    if let Err(e) = run(&args) {
        log::error!("{e}");
        eprintln!("{} {e}", "ERROR".on_red());
        std::process::exit(1);
    }
    Ok(())
}

/// log4rs.yml if present, warnings to stderr otherwise.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
