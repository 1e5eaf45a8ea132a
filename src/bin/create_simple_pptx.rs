//! Build the `simple-zh` deck into `simple.pptx`.
//!
//! Takes no arguments and always exits with status 0.

use pptx_fixtures::fixtures::{build_and_save, catalog, report};

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let fixture = catalog::simple_zh();
    let outcome = build_and_save(&fixture, fixture.default_output);

    if let Err(err) = report(&fixture, &outcome, &mut std::io::stdout().lock()) {
        log::error!("cannot write report: {}", err);
    }
}
