pub mod args;
pub mod config;
pub mod logger;

pub use args::{parse, Args, Commands, LogFormat};
pub use config::init_config;
pub use logger::init_logging;

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::Settings;
use crate::duration::{add, subtract, Argument, DurationValue};
use crate::errors::{Error, Result};
use crate::locale;

/// Reads a command line operand: an integer is milliseconds, an RFC 3339
/// timestamp is an instant, anything else is ISO-8601 text.
pub fn parse_argument(text: &str) -> Argument {
    if let Ok(ms) = text.parse::<i64>() {
        return Argument::Integer(ms);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Argument::Instant(instant.with_timezone(&Utc));
    }
    Argument::Text(text.to_string())
}

fn duration_operand(text: &str) -> Result<DurationValue> {
    DurationValue::from_args(&[parse_argument(text)])
}

/// Locale hint in precedence order: `--lang`, config `locale_hint`, then the
/// environment language.
pub fn locale_hint(
    lang: Option<&str>,
    settings: &Settings,
    env_lang: Option<String>,
) -> Option<String> {
    lang.map(str::to_string)
        .or_else(|| settings.locale_hint.clone())
        .or(env_lang)
}

/// Executes `args.command` and returns what should be printed.
pub fn run(args: &Args, settings: &Settings) -> Result<String> {
    let hint = locale_hint(
        args.lang.as_deref(),
        settings,
        std::env::var("LANG").ok(),
    );
    let humanizer = settings.install()?.with_locale_hint(hint);

    let locale = args.locale.as_deref().unwrap_or(settings.locale.as_str());
    let format = args.format.unwrap_or(settings.format);
    let base_unit = args.base_unit.unwrap_or(settings.base_unit);

    let value = match &args.command {
        Commands::Humanize { input } => duration_operand(input)?,
        Commands::Between { from, to } => {
            DurationValue::from_args(&[parse_argument(from), parse_argument(to)])?
        }
        Commands::Add { a, b } => add(duration_operand(a)?, duration_operand(b)?),
        Commands::Sub { a, b } => subtract(duration_operand(a)?, duration_operand(b)?),
        Commands::Iso { input } => return Ok(duration_operand(input)?.to_iso()),
        Commands::Locales => return locale::catalog().to_yaml(),
    };

    debug!(
        "Rendering {}ms with locale {:?}",
        value.as_millis(),
        humanizer.effective_locale(locale)
    );
    humanizer.humanize(value, locale, format, base_unit)
}

/// Process exit code for a failed [`run`].
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::BadConfig(_) => exitcode::CONFIG,
        Error::MissingResource { .. } => exitcode::SOFTWARE,
        _ => exitcode::DATAERR,
    }
}
