use std::{error::Error, path::PathBuf};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use qrcraft::{Breakpoint, ECLevel, MaskPattern, Mode, QRBuilder, Version};

#[derive(Parser)]
#[command(name = "qrcraft", about = "Alphanumeric QR Code encoder", disable_version_flag = true)]
struct Cli {
    /// Text to encode: digits, upper case letters and " $%*+-./:"
    text: String,

    /// Symbol version, 1 to 40
    #[arg(long = "version", requires_all = ["ec_level", "mask", "mode"])]
    qr_version: Option<Version>,

    /// Error correction level: L, M, Q or H
    #[arg(long, requires_all = ["qr_version", "mask", "mode"])]
    ec_level: Option<ECLevel>,

    /// Mask pattern, 0 to 7
    #[arg(long, requires_all = ["qr_version", "ec_level", "mode"])]
    mask: Option<MaskPattern>,

    /// Encoding mode: alphanumeric, numeric, byte or kanji
    #[arg(long, requires_all = ["qr_version", "ec_level", "mask"])]
    mode: Option<Mode>,

    /// Halt after a pipeline stage and print the step log, `none` logs every stage
    #[arg(long)]
    debug: Option<Breakpoint>,

    /// Resolution step 1 to 5, mapping to 2, 4, 8, 16 or 32 pixels per module
    #[arg(long, default_value_t = 3)]
    resolution: u8,

    /// Save the rendered symbol to this image file instead of printing it
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    if let Err(err) = run(Cli::parse()) {
        error!(%err, "Encoding failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut builder = QRBuilder::new(&cli.text);
    if let (Some(version), Some(ec_level), Some(mask), Some(mode)) =
        (cli.qr_version, cli.ec_level, cli.mask, cli.mode)
    {
        builder.advanced_mode(mode, version, ec_level, mask);
    }
    if let Some(bp) = cli.debug {
        builder.debug_mode(bp);
    }
    info!(metadata = %builder.metadata(), "Settings");

    match cli.output {
        Some(path) => {
            builder.render(cli.resolution)?.save(&path)?;
            println!("Saved {}", path.display());
        }
        None => {
            let qr = builder.build()?;
            match cli.debug {
                Some(bp) if bp != Breakpoint::None => println!("{}", qr.to_debug_str()),
                _ => println!("{}", qr.to_str(1)),
            }
        }
    }

    if cli.debug.is_some() {
        println!("{}", builder.debug_trace());
    }
    Ok(())
}
