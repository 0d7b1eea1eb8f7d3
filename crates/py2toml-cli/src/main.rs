use clap::Parser;
use py2toml::{
    commands::convert::{self, ConvertCommand},
    logger, GlobalOpts,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "py2toml")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Convert a setup.py script into a pyproject.toml manifest",
    long_about = "py2toml statically parses a legacy setup.py file and generates an equivalent Poetry-style pyproject.toml. No Python interpreter is involved; argument values are read from the source text."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(flatten)]
    convert: ConvertCommand,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap exits with status 2 on usage errors; this tool promises 1.
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    // Internal tracing events from the library crates are silent unless a
    // RUST_LOG filter asks for them.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = convert::handle_convert(&cli.convert) {
        logger::error(&format!("Conversion failed: {:#}", e));
        std::process::exit(1);
    }
}
