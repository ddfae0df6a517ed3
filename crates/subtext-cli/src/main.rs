use anyhow::{Context, Result, bail};
use std::{
    env, fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use subtext_config::{Config, OutputFormat};
use subtext_engine::{Block, IoError, io::parse_reader};

const USAGE: &str =
    "Usage: subtext-cli [--format json|debug|text] [--chunk-size N] [--write-config] [PATH]";

/// Command-line flags; anything left unset falls back to the config file.
#[derive(Debug, Default, PartialEq)]
struct Args {
    format: Option<OutputFormat>,
    chunk_size: Option<usize>,
    path: Option<PathBuf>,
    write_config: bool,
    help: bool,
}

impl Args {
    /// Overlays the flags that were given onto `config`.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(path) = &self.path {
            config.input = Some(path.clone());
        }
        config
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--write-config" => parsed.write_config = true,
            "-f" | "--format" => {
                let value = args.next().context("--format needs a value")?;
                parsed.format = Some(value.parse()?);
            }
            "-c" | "--chunk-size" => {
                let value = args.next().context("--chunk-size needs a value")?;
                let size: usize = value
                    .parse()
                    .with_context(|| format!("invalid chunk size {value:?}"))?;
                if size == 0 {
                    bail!("--chunk-size must be at least 1");
                }
                parsed.chunk_size = Some(size);
            }
            flag if flag.starts_with('-') && flag != "-" => bail!("unknown option {flag}"),
            path => {
                if parsed.path.is_some() {
                    bail!("only one PATH may be given");
                }
                parsed.path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

/// Writes one block in `format`. `first` marks the first block of the output.
fn write_block<W: Write>(out: &mut W, format: OutputFormat, block: &Block, first: bool) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, block)?;
            writeln!(out)
        }
        OutputFormat::Debug => writeln!(out, "{block:?}"),
        OutputFormat::Text => {
            // Newlines go between lines only, matching `serialize`.
            if !first {
                writeln!(out)?;
            }
            write!(out, "{block}")
        }
    }
}

/// Streams the configured input to `out`, stopping at the first write error.
fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let format = config.format;
    let chunk_size = config.chunk_size;
    let path = config.input.as_ref().filter(|p| p.as_os_str() != "-");

    let mut first = true;
    let mut on_block = |block: Block| -> Result<(), IoError> {
        write_block(&mut *out, format, &block, first)?;
        first = false;
        Ok(())
    };

    let count = match path {
        Some(path) => {
            log::info!("parsing {} in {chunk_size}-byte chunks", path.display());
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            parse_reader(file, chunk_size, &mut on_block)?
        }
        None => {
            log::info!("parsing stdin in {chunk_size}-byte chunks");
            parse_reader(io::stdin().lock(), chunk_size, &mut on_block)?
        }
    };

    out.flush()?;
    Ok(count)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args(env::args().skip(1)).context(USAGE)?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config_path = Config::config_path();
    let config = match Config::load_from_path(&config_path) {
        Ok(Some(config)) => {
            log::debug!("loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("ignoring config file: {e}");
            Config::default()
        }
    };
    let config = args.apply(config);

    if args.write_config {
        config.save_to_path(&config_path)?;
        log::info!("wrote config to {}", config_path.display());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = run(&config, &mut out)?;
    log::debug!("emitted {count} blocks");
    Ok(())
}
