use clap::Parser;
use fluxo::app::{FluxoApp, FluxoError};

fn main() -> Result<(), FluxoError> {
    env_logger::init();
    let args = FluxoApp::parse();
    args.op.run()
}
