use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_pentrix::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment.
    dotenvy::dotenv().ok();
    let options = PTPServerOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or("info".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Build the shared figure catalog and serve PTP.
    let catalog = Box::leak(Box::new(Catalog::generate(options.sizes.iter().copied())?));
    let result = PTPServer::new(options, catalog).and_then(|mut server| server.run());
    if let Err(e) = &result {
        log::error!("fatal error: {}", e);
    }
    result
}
