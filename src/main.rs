//! lsb-stego - Least-significant-bit image steganography.
//!
//! Embeds messages into PNG images, extracts them again, and reports
//! fidelity metrics between a cover and its stego image.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use lsb_stego::config::{Addressing, StegoConfig};
use lsb_stego::stego::{capacity_bits, capacity_bytes, load_keys, save_keys};
use lsb_stego::{image_io, metrics, Recovery, Steganographer};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lsb-stego")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Hide messages in the least-significant bits of image pixels",
    long_about = "Embeds a message into the channel LSBs of an RGB image in reverse raster order, \
                  recovers it from an occupancy count or a key file, and scores fidelity loss."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a message into a cover image
    Embed {
        /// Cover image (any format the image decoder supports)
        cover: PathBuf,

        /// Output stego image (always written as PNG)
        output: PathBuf,

        /// Message text to embed
        #[arg(long, conflicts_with = "input")]
        message: Option<String>,

        /// File whose bytes are embedded
        #[arg(long, conflicts_with = "message")]
        input: Option<PathBuf>,

        /// Record address keys to this file (key-list addressing)
        #[arg(long)]
        keys: Option<PathBuf>,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Extract a message from a stego image
    Extract {
        /// Stego image
        stego: PathBuf,

        /// Number of bits embedded (contiguous addressing)
        #[arg(long, conflicts_with = "keys", required_unless_present = "keys")]
        occupancy: Option<usize>,

        /// Key file written at embed time (key-list addressing)
        #[arg(long, conflicts_with = "occupancy")]
        keys: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare a cover image against its stego image
    Metrics {
        /// Original cover image
        cover: PathBuf,

        /// Stego image
        stego: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how much a cover image can hold
    Capacity {
        /// Cover image
        image: PathBuf,
    },
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Embed {
            cover,
            output,
            message,
            input,
            keys,
            config,
        } => cmd_embed(&cover, &output, message, input, keys, config),

        Commands::Extract {
            stego,
            occupancy,
            keys,
            output,
        } => cmd_extract(&stego, occupancy, keys, output),

        Commands::Metrics { cover, stego, json } => cmd_metrics(&cover, &stego, json),

        Commands::Capacity { image } => cmd_capacity(&image),
    }
}

fn cmd_embed(
    cover: &Path,
    output: &Path,
    message: Option<String>,
    input: Option<PathBuf>,
    keys: Option<PathBuf>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = match config {
        Some(path) => StegoConfig::load(&path)?,
        None => StegoConfig::default(),
    };
    if keys.is_some() {
        config.addressing = Addressing::KeyList;
    }
    if config.addressing == Addressing::KeyList && keys.is_none() {
        bail!("key-list addressing needs --keys <file> to store the address keys");
    }

    let content = match (input, message) {
        (Some(path), None) => {
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, Some(s)) => s.into_bytes(),
        (None, None) => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
        (Some(_), Some(_)) => unreachable!(),
    };

    let stego = Steganographer::new(config)?;
    let embedding = stego
        .embed_file(cover, output, &content)
        .with_context(|| format!("embedding into {}", cover.display()))?;

    if let (Some(path), Some(address_keys)) = (keys.as_deref(), embedding.keys.as_deref()) {
        save_keys(path, address_keys)
            .with_context(|| format!("writing key file {}", path.display()))?;
        println!("Wrote {} address keys to {}", address_keys.len(), path.display());
    }

    println!("Embedded {} bytes into {}", content.len(), output.display());
    println!("Occupancy: {} bits", embedding.occupancy);

    Ok(())
}

fn cmd_extract(
    stego_path: &Path,
    occupancy: Option<usize>,
    keys: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let recovery = match (occupancy, keys) {
        (Some(bits), None) => Recovery::Length(bits),
        (None, Some(path)) => Recovery::Keys(
            load_keys(&path).with_context(|| format!("reading key file {}", path.display()))?,
        ),
        _ => unreachable!(),
    };

    let stego = Steganographer::default();
    let data = stego
        .extract_file(stego_path, &recovery)
        .with_context(|| format!("extracting from {}", stego_path.display()))?;

    match output {
        Some(path) => {
            std::fs::write(&path, &data)?;
            println!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            io::stdout().write_all(&data)?;
        }
    }

    Ok(())
}

fn cmd_metrics(cover: &Path, stego: &Path, json: bool) -> anyhow::Result<()> {
    let cover = image_io::load_container(cover)?;
    let stego = image_io::load_container(stego)?;
    let report = metrics::compute(&cover, &stego)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.summary());
    }

    Ok(())
}

fn cmd_capacity(image: &Path) -> anyhow::Result<()> {
    let container = image_io::load_container(image)?;
    let (height, width, channels) = container.shape();

    println!("Image:     {}x{} ({} channels)", width, height, channels);
    println!("Capacity:  {} bits", capacity_bits(height, width));
    println!("           {} bytes", capacity_bytes(height, width));

    Ok(())
}
