//! Build the `conversion-test` deck into `tests/fixtures/simple.pptx`.
//!
//! Takes no arguments and always exits with status 0; failures are reported
//! on standard output.

use pptx_fixtures::fixtures::{build_and_save, catalog, report};

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let fixture = catalog::conversion_test();
    let outcome = build_and_save(&fixture, fixture.default_output);
    if let Err(err) = &outcome {
        log::debug!("build failed: {:?}", err);
    }

    if let Err(err) = report(&fixture, &outcome, &mut std::io::stdout().lock()) {
        log::error!("cannot write report: {}", err);
    }
}
