use netoverlap::cli::execute;
use netoverlap::config::Settings;
use netoverlap::logging::init_logging;
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_config)?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let mut stdout = std::io::stdout().lock();
    let code = execute(&args, &settings, &mut stdout);
    stdout.flush()?;

    std::process::exit(code)
}
