use greeting_api::{adapter, config::Config, run_app};
use lambda_http::Error;

// The runtime is built by hand so the environment is settled before any
// worker thread exists.
fn main() -> Result<(), Error> {
    let config = Config::from_env();
    if config.strip_stage_prefix {
        adapter::ignore_stage_in_path();
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_app(config))
}
