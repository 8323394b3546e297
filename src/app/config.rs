use log::error;
use std::io::{self, IsTerminal};

use super::args::Args;
use crate::config::Settings;

pub fn init_config(args: &Args) -> Settings {
    let Some(path) = args.config.as_deref() else {
        return Settings::default();
    };

    match Settings::load(path) {
        Ok(settings) => settings,
        Err(err) => {
            if io::stdin().is_terminal() {
                eprintln!("Config parse error: {err}");
            } else {
                error!("Config parse error: {err:?}");
            }
            std::process::exit(exitcode::CONFIG);
        }
    }
}
