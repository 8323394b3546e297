use log::error;

use durafmt::app;
use durafmt::config::VERSION;

fn main() {
    let args = app::parse();
    app::init_logging(&args);
    log::debug!("durafmt {VERSION}");

    let settings = app::init_config(&args);

    match app::run(&args, &settings) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err}");
            eprintln!("durafmt: {err}");
            std::process::exit(app::exit_code(&err));
        }
    }
}
