use std::path::Path;

use flexi_logger::{
    opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};

/// Start file logging. The terminal belongs to the UI, so nothing goes to stdout.
/// Keep the returned handle alive for the life of the program.
pub fn setup_logging(level: &str, dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_file(FileSpec::default().directory(dir).basename("deckmark"))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}
