//! # textcodec CLI
//!
//! Converts and validates text between the registered charsets, streaming
//! input to output so files of any size run in bounded memory.

#[cfg(feature = "cli")]
use std::fs::{self, File};
#[cfg(feature = "cli")]
use std::io::{self, BufWriter, Read, Write};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use serde::Serialize;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
use textcodec::codecs::utf8::Utf8Encoder;
#[cfg(feature = "cli")]
use textcodec::{
    Charset, CharsetInfo, Decoder, DecodingReader, Encoder, EncodingWriter, Error as CodecError,
    Status, Translator, entity_decoder, fallback, registry,
};

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI features disabled. Enable with --features cli");
    std::process::exit(1);
}

/// Environment variable holding the log filter
#[cfg(feature = "cli")]
const LOG_ENV: &str = "TEXTCODEC_LOG";

/// textcodec: convert text between character sets
#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "textcodec")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level unless TEXTCODEC_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a file from one charset to another
    Convert(ConvertArgs),

    /// List registered charsets
    List(ListArgs),

    /// Check that input decodes cleanly in a charset
    Validate(ValidateArgs),

    /// Describe a charset
    Info(InfoArgs),
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ConvertArgs {
    /// Source charset
    #[arg(short = 'f', long = "from")]
    from: String,

    /// Target charset
    #[arg(short = 't', long = "to")]
    to: String,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Charset to try when the source charset rejects a sequence (repeatable)
    #[arg(long = "fallback", value_name = "CHARSET")]
    fallback: Vec<String>,

    /// Decode HTML character references before the source charset
    #[arg(long)]
    entities: bool,

    /// Fail on the first invalid or unmappable character instead of substituting
    #[arg(long)]
    strict: bool,

    /// Read buffer size (KB)
    #[arg(long, default_value = "64")]
    buffer_size: usize,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ListArgs {
    /// Show aliases
    #[arg(long)]
    details: bool,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ValidateArgs {
    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Expected charset
    #[arg(short, long)]
    encoding: String,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InfoArgs {
    /// Charset to describe
    charset: String,
}

#[cfg(feature = "cli")]
#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct ConversionReport {
    from: &'static str,
    to: &'static str,
    success: bool,
    bytes_read: u64,
    bytes_written: u64,
    processing_time_ms: u64,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct ValidationReport {
    charset: &'static str,
    valid: bool,
    bytes: usize,
    error: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct CharsetReport {
    #[serde(flatten)]
    info: CharsetInfo,
    ascii_compatible: bool,
    /// How the charset decodes `0x41 0xE9 0x80`
    sample: Vec<Status>,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(ref args) => convert_command(args, &cli)?,
        Commands::List(ref args) => list_command(args, &cli)?,
        Commands::Validate(ref args) => validate_command(args, &cli)?,
        Commands::Info(ref args) => info_command(args, &cli)?,
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn charset(name: &str) -> Result<&'static Charset> {
    let charset = textcodec::lookup(name).ok_or_else(|| CodecError::UnknownCharset {
        name: name.to_string(),
    })?;
    Ok(charset)
}

/// The source charset's decoder, wrapped in a fallback chain when asked
#[cfg(feature = "cli")]
fn build_decoder(args: &ConvertArgs) -> Result<Box<dyn Decoder>> {
    let primary = charset(&args.from)?.new_decoder();
    if !args.entities && args.fallback.is_empty() {
        return Ok(primary);
    }

    let mut chain: Vec<Box<dyn Decoder>> = Vec::with_capacity(args.fallback.len() + 2);
    if args.entities {
        chain.push(Box::new(entity_decoder()));
    }
    chain.push(primary);
    for name in &args.fallback {
        chain.push(charset(name)?.new_decoder());
    }
    tracing::debug!(decoders = chain.len(), "using fallback chain");
    Ok(Box::new(fallback(chain)))
}

#[cfg(feature = "cli")]
fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    Ok(match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input");
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(file)
        }
        None => {
            tracing::debug!("reading from stdin");
            Box::new(io::stdin().lock())
        }
    })
}

#[cfg(feature = "cli")]
fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}

/// Counts bytes passing through a reader or writer
#[cfg(feature = "cli")]
struct Counted<T> {
    inner: T,
    count: u64,
}

#[cfg(feature = "cli")]
impl<T> Counted<T> {
    fn new(inner: T) -> Self {
        Self { inner, count: 0 }
    }
}

#[cfg(feature = "cli")]
impl<T: Read> Read for Counted<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

#[cfg(feature = "cli")]
impl<T: Write> Write for Counted<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(feature = "cli")]
fn convert_command(args: &ConvertArgs, cli: &Cli) -> Result<()> {
    let start_time = std::time::Instant::now();

    let from = charset(&args.from)?;
    let to = charset(&args.to)?;
    tracing::info!(from = from.name(), to = to.name(), "converting");

    let decoder = build_decoder(args)?;
    let encoder = to.new_encoder();

    let (success, bytes_read, bytes_written) = if args.strict {
        convert_strict(args, decoder, encoder)?
    } else {
        convert_streaming(args, decoder, encoder)?
    };

    let processing_time = start_time.elapsed();
    tracing::debug!(bytes_read, bytes_written, elapsed = ?processing_time, "conversion finished");

    match cli.format {
        OutputFormat::Json => {
            let report = ConversionReport {
                from: from.name(),
                to: to.name(),
                success,
                bytes_read,
                bytes_written,
                processing_time_ms: processing_time.as_millis() as u64,
            };
            eprintln!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if !success {
                eprintln!("! Some characters could not be converted and were substituted");
            } else if cli.verbose || args.output.is_some() {
                eprintln!("✓ Conversion completed successfully");
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn convert_streaming(
    args: &ConvertArgs,
    decoder: Box<dyn Decoder>,
    encoder: Box<dyn Encoder>,
) -> Result<(bool, u64, u64)> {
    let source = Counted::new(open_input(args.input.as_ref())?);
    let sink = Counted::new(open_output(args.output.as_ref())?);

    let capacity = args.buffer_size.max(1) * 1024;
    let mut reader = DecodingReader::with_capacity(capacity, source, decoder);
    let mut writer = EncodingWriter::new(sink, encoder);

    io::copy(&mut reader, &mut writer).context("Conversion failed")?;

    let success = reader.is_clean() && writer.is_clean();
    let bytes_read = reader.get_ref().count;
    let sink = writer.finish().context("Failed to write output")?;
    Ok((success, bytes_read, sink.count))
}

#[cfg(feature = "cli")]
fn convert_strict(
    args: &ConvertArgs,
    decoder: Box<dyn Decoder>,
    encoder: Box<dyn Encoder>,
) -> Result<(bool, u64, u64)> {
    let input = read_input(args.input.as_ref())?;
    let output = Translator::new(decoder, encoder)
        .convert_strict(&input)
        .context("Conversion failed")?;

    match args.output {
        Some(ref path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?
        }
        None => io::stdout().write_all(&output).context("Failed to write to stdout")?,
    }
    Ok((true, input.len() as u64, output.len() as u64))
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    open_input(path)?
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;
    Ok(buffer)
}

#[cfg(feature = "cli")]
fn list_command(args: &ListArgs, cli: &Cli) -> Result<()> {
    let charsets: Vec<CharsetInfo> = registry().charsets().map(Charset::info).collect();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&charsets)?);
        }
        OutputFormat::Text => {
            println!("Registered charsets ({} total):", charsets.len());
            println!();
            for info in &charsets {
                if args.details && !info.aliases.is_empty() {
                    println!("{:16} {}", info.name, info.aliases.join(", "));
                } else {
                    println!("{}", info.name);
                }
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn validate_command(args: &ValidateArgs, cli: &Cli) -> Result<()> {
    let charset = charset(&args.encoding)?;
    let input = read_input(args.input.as_ref())?;

    let result = Translator::new(charset.new_decoder(), Utf8Encoder).convert_strict(&input);
    let report = ValidationReport {
        charset: charset.name(),
        valid: result.is_ok(),
        bytes: input.len(),
        error: result.err().map(|e| e.to_string()),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => match report.error {
            None => println!("✓ Input is valid {}", report.charset),
            Some(ref error) => {
                println!("✗ Input is not valid {}", report.charset);
                println!("  {error}");
            }
        },
    }

    std::process::exit(if report.valid { 0 } else { 1 });
}

#[cfg(feature = "cli")]
fn info_command(args: &InfoArgs, cli: &Cli) -> Result<()> {
    let charset = charset(&args.charset)?;
    let report = CharsetReport {
        info: charset.info(),
        ascii_compatible: is_ascii_compatible(charset),
        sample: sample_statuses(charset),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("Charset: {}", report.info.name);
            if report.info.aliases.is_empty() {
                println!("Aliases: none");
            } else {
                println!("Aliases: {}", report.info.aliases.join(", "));
            }
            println!(
                "ASCII Compatible: {}",
                if report.ascii_compatible { "Yes" } else { "No" }
            );
            println!("Decoding 41 E9 80: {:?}", report.sample);
        }
    }

    Ok(())
}

/// Every byte below 0x80 decodes to itself
#[cfg(feature = "cli")]
fn is_ascii_compatible(charset: &Charset) -> bool {
    let mut decoder = charset.new_decoder();
    (0u8..0x80).all(|byte| {
        let decoded = decoder.decode(&[byte]);
        decoded.status == Status::Success
            && decoded.consumed == 1
            && decoded.code_point == char::from(byte)
    })
}

#[cfg(feature = "cli")]
fn sample_statuses(charset: &Charset) -> Vec<Status> {
    let mut decoder = charset.new_decoder();
    let input = [0x41, 0xE9, 0x80];
    let mut statuses = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        let rest = &input[pos..];
        let mut decoded = decoder.decode(rest);
        if decoded.status == Status::NoRoom {
            decoded = decoder.decode_last(rest);
        }
        statuses.push(decoded.status);
        match decoded.status {
            Status::NoRoom => break,
            _ => pos += decoded.consumed.max(1),
        }
    }
    statuses
}
