//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use huffdict::tools::cli::{hfmopts_init, run};

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line lowers it.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let options = hfmopts_init()?;

    let output = run(&options)?;
    println!("{}", output);

    info!("Done.");
    Ok(())
}
