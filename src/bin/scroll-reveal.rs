use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scroll-reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed styles of a page at one scroll position.
    Frame(FrameArgs),
    /// Replay a timed event script and stream one JSON line per pass.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offset to load the page at (overrides the page's `scroll_top`).
    #[arg(long)]
    scroll_top: Option<f64>,

    /// Start with the reduced-motion preference set.
    #[arg(long)]
    reduced_motion: bool,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Event script JSON: `[{ "at_ms": .., "type": "scroll" | "resize", .. }]`.
    #[arg(long)]
    script: PathBuf,

    /// Output JSON-lines path (stdout when absent).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Start with the reduced-motion preference set.
    #[arg(long)]
    reduced_motion: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_page_json(path: &Path) -> anyhow::Result<scroll_reveal::PageDef> {
    let f = File::open(path).with_context(|| format!("open page '{}'", path.display()))?;
    let page = scroll_reveal::PageDef::from_reader(BufReader::new(f))
        .with_context(|| format!("parse page '{}'", path.display()))?;
    Ok(page)
}

fn read_script_json(path: &Path) -> anyhow::Result<Vec<scroll_reveal::ScriptEvent>> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let script = serde_json::from_reader(BufReader::new(f)).with_context(|| "parse script JSON")?;
    Ok(script)
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            if let Some(parent) = p.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(p).with_context(|| format!("create '{}'", p.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(std::io::stdout().lock()),
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut page = read_page_json(&args.in_path)?;
    if let Some(scroll_top) = args.scroll_top {
        page.scroll_top = scroll_top;
    }
    page.options.reduced_motion |= args.reduced_motion;

    let mut styles = scroll_reveal::ComputedStyles::new();
    let session = scroll_reveal::ScrollSession::start(&page, &mut styles)?;

    let mut out = open_output(args.out.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &styles).with_context(|| "write computed styles")?;
    writeln!(out)?;
    out.flush()?;

    eprintln!(
        "mode={:?} scroll_top={} passes={}",
        session.scheduler().mode(),
        session.layout().metrics().scroll_top,
        session.scheduler().stats().passes
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut page = read_page_json(&args.in_path)?;
    page.options.reduced_motion |= args.reduced_motion;
    let script = read_script_json(&args.script)?;

    let mut sink = scroll_reveal::JsonLinesSink::new(open_output(args.out.as_deref())?);
    let mut session = scroll_reveal::ScrollSession::start(&page, &mut sink)?;
    let stats = session.run(&script, &mut sink)?;
    let lines = sink.lines_written();
    sink.finish()?;

    eprintln!(
        "events={} coalesced={} frames_requested={} passes={} lines={}",
        stats.events, stats.coalesced, stats.frames_requested, stats.passes, lines
    );
    Ok(())
}
