use anyhow::Context as _;
use clap::Parser;
use pitchdeck::deck::{self, Brand, DeckOutline};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pitchdeck", version, about)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the deck content as YAML instead of writing the file.
    #[arg(long)]
    outline: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let brand = Brand::default();
    if cli.outline {
        let yaml = DeckOutline::new(&brand)
            .to_yaml()
            .context("render deck outline")?;
        print!("{yaml}");
        return Ok(());
    }

    let pres = deck::build_deck(&brand);
    pres.save(deck::OUTPUT_FILE_NAME)
        .with_context(|| format!("save '{}'", deck::OUTPUT_FILE_NAME))?;
    println!("已生成：{}", deck::OUTPUT_FILE_NAME);
    Ok(())
}
