use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::level_filters::LevelFilter;

/// Inject a CSS opacity animation, compiled from a show/hide/wait script, into an SVG.
#[derive(Parser, Debug)]
#[command(name = "svg-keyframes", version)]
struct Cli {
    /// Input SVG document.
    input_svg: PathBuf,

    /// Animation script (`show <id>`, `hide <id>`, `wait <ms>` per line).
    script: PathBuf,

    /// Output SVG path.
    output_svg: PathBuf,

    /// JSON options file; explicit flags win over its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Element id prefix prepended to every object id.
    #[arg(long)]
    id_prefix: Option<String>,

    /// Prefix for generated animation names.
    #[arg(long)]
    animation_prefix: Option<String>,

    /// Width of one show/hide ramp in milliseconds.
    #[arg(long)]
    step_ms: Option<u64>,

    /// Fail on the first malformed script line instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Print the compiled timeline as JSON on stdout.
    #[arg(long)]
    dump_timeline: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> anyhow::Result<svg_keyframes::AnimateOptions> {
        let mut opts = match &self.config {
            Some(path) => svg_keyframes::AnimateOptions::from_json_file(path)
                .with_context(|| format!("load options '{}'", path.display()))?,
            None => svg_keyframes::AnimateOptions::default(),
        };
        if let Some(p) = &self.id_prefix {
            opts.id_prefix = p.clone();
        }
        if let Some(p) = &self.animation_prefix {
            opts.animation_prefix = p.clone();
        }
        if let Some(ms) = self.step_ms {
            opts.step_ms = ms;
        }
        if self.strict {
            opts.parse_mode = svg_keyframes::ParseMode::Strict;
        }
        opts.validate()?;
        Ok(opts)
    }

    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let opts = cli.options()?;
    let animated =
        svg_keyframes::animate_files(&cli.input_svg, &cli.script, &cli.output_svg, &opts)
            .with_context(|| {
                format!(
                    "animate '{}' with '{}'",
                    cli.input_svg.display(),
                    cli.script.display()
                )
            })?;

    if cli.dump_timeline {
        let json = serde_json::to_string_pretty(&animated.timeline)
            .with_context(|| "serialize timeline")?;
        println!("{json}");
    }

    if !animated.issues.is_empty() {
        eprintln!("skipped or zeroed {} malformed line(s)", animated.issues.len());
    }
    eprintln!("wrote {}", cli.output_svg.display());
    Ok(())
}
