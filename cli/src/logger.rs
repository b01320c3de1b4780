use brace_core::BResult;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Logs go to stderr so generated text on stdout can be piped.
pub fn init_logger(verbose: bool, no_color: bool) -> BResult<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    Ok(Dispatch::new()
        .format(move |out, message, record| {
            let level = if no_color {
                record.level().to_string()
            } else {
                colors.color(record.level()).to_string()
            };
            let level = level.to_ascii_lowercase();

            out.finish(format_args!("{level} {message}"))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?)
}
