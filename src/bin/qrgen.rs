use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::bitstream::BitstreamAssembler;
use rust_qr_gen::encoder::function_mask::FunctionMask;
use rust_qr_gen::encoder::reed_solomon::syndromes;
use rust_qr_gen::encoder::tables::VERSIONS;
use rust_qr_gen::tools::{RenderOptions, save_image, to_ascii};
use rust_qr_gen::{EncoderConfig, Encoding, QrEncoder};
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "qrgen", version, about = "RustQR symbol generator tools")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "QRGEN_LOG", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print it, or write it as an image
    Encode {
        text: String,
        /// Write an image instead of printing (format from extension)
        #[arg(long)]
        png: Option<PathBuf>,
        /// Pixels per module for image output
        #[arg(long, default_value_t = 8)]
        scale: u32,
        /// Quiet zone width in modules
        #[arg(long, default_value_t = 4)]
        quiet_zone: u32,
        /// Fail instead of truncating oversized payloads
        #[arg(long)]
        strict: bool,
    },
    /// Show version, codewords and error correction check for a payload
    Inspect {
        text: String,
    },
    /// Print the version table
    Table,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);

    match cli.command {
        Command::Encode {
            text,
            png,
            scale,
            quiet_zone,
            strict,
        } => encode_cmd(&text, png, RenderOptions { scale, quiet_zone }, strict),
        Command::Inspect { text } => inspect_cmd(&text),
        Command::Table => {
            table_cmd();
            Ok(())
        }
    }
}

fn init_logging(log_level: &str, json: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn encode_cmd(
    text: &str,
    png: Option<PathBuf>,
    options: RenderOptions,
    strict: bool,
) -> anyhow::Result<()> {
    let config = if strict {
        EncoderConfig::strict()
    } else {
        EncoderConfig::default()
    };
    let encoding = QrEncoder::with_config(config)
        .encode(text)
        .context("encoding payload")?;

    if let Encoding::Truncated { original_len, .. } = &encoding {
        warn!(
            original_len,
            dropped = encoding.dropped_bytes(),
            "payload truncated to fit the largest version"
        );
    }

    let symbol = encoding.symbol();
    match png {
        Some(path) => {
            save_image(&symbol.modules, &path, options)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "image written");
            println!(
                "Wrote version {} ({}x{}) to {}",
                symbol.version.number(),
                symbol.size(),
                symbol.size(),
                path.display()
            );
        }
        None => print!("{}", to_ascii(&symbol.modules, options.quiet_zone as usize)),
    }
    Ok(())
}

fn inspect_cmd(text: &str) -> anyhow::Result<()> {
    let encoding = QrEncoder::new().encode(text)?;
    let symbol = encoding.symbol();
    let version = symbol.version;

    println!("Payload: {} bytes", text.len());
    if encoding.is_truncated() {
        println!("  truncated to {} bytes", symbol.payload.len());
    }
    println!(
        "Version: {} ({}x{}), capacity {} bytes",
        version.number(),
        symbol.size(),
        symbol.size(),
        version.data_capacity()
    );

    let mask = FunctionMask::new(version);
    println!(
        "Modules: {} function, {} data, {} bitstream bits",
        mask.function_modules_count(),
        mask.data_modules_count(),
        version.bit_len()
    );

    let codewords = BitstreamAssembler::codewords(&symbol.payload, &version)?;
    let (data, ecc) = codewords.split_at(version.data_codewords());
    println!("Data codewords ({}): {}", data.len(), hex(data));
    println!("EC codewords ({}): {}", ecc.len(), hex(ecc));

    let clean = syndromes(&codewords, version.ec_codewords())
        .iter()
        .all(|&s| s == 0);
    println!("Syndromes: {}", if clean { "all zero" } else { "NON-ZERO" });
    println!("Dark modules: {}", symbol.modules.count_ones());
    Ok(())
}

fn table_cmd() {
    println!("version  size  data  ec  remainder  capacity");
    for v in VERSIONS {
        println!(
            "{:>7}  {:>4}  {:>4}  {:>2}  {:>9}  {:>8}",
            v.number(),
            v.size(),
            v.data_codewords(),
            v.ec_codewords(),
            v.remainder_bits(),
            v.data_capacity()
        );
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
