use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    process::{Command as Process, Stdio},
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pitchboard::{
    BoardConfig, BoardDriver, BoardState, Frame, JsonFileTacticStore, LiveBoard, NewTactic, Pose,
    Scene, ScriptedScenario, TacticComposer, TacticId, TacticKind, TacticStore,
    TextModelGenerator,
};

#[derive(Parser, Debug)]
#[command(name = "pitchboard", version)]
struct Cli {
    /// Engine config JSON (sample rate, tick interval, scenario tuning).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpolate a list of poses into one animation.
    Chain(ChainArgs),
    /// Generate a drill from a text prompt.
    Scenario(ScenarioArgs),
    /// Play an animation through a live board in real time.
    Replay(ReplayArgs),
    /// Manage a JSON tactic store.
    Tactics(TacticsArgs),
}

#[derive(Parser, Debug)]
struct ChainArgs {
    /// Input JSON: an array of poses, each an array of tokens.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Duration of every pose-to-pose segment in milliseconds.
    #[arg(long, default_value_t = 1000)]
    step_ms: u64,

    /// Sampling rate in Hz (defaults to the config value).
    #[arg(long)]
    rate: Option<f64>,

    /// Output frames JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScenarioArgs {
    /// Coaching request, e.g. "attack down the right and shoot".
    #[arg(long)]
    prompt: String,

    /// Shell command acting as the text model: reads the prompt on stdin, prints its reply.
    #[arg(long)]
    model_cmd: Option<String>,

    /// Give up on the model after this many milliseconds.
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Output frames JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input frames JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print progress every N milliseconds.
    #[arg(long, default_value_t = 250)]
    report_ms: u64,
}

#[derive(Parser, Debug)]
struct TacticsArgs {
    /// Store file (created on first write).
    #[arg(long, default_value = "tactics.json")]
    store: PathBuf,

    #[command(subcommand)]
    action: TacticsAction,
}

#[derive(Subcommand, Debug)]
enum TacticsAction {
    /// Replace the built-in presets.
    Seed,
    /// List a scope's tactics plus presets, newest first.
    List {
        /// Owning scope (academy id).
        #[arg(long)]
        scope: Option<String>,
    },
    /// Print one tactic as JSON.
    Show {
        /// Tactic id.
        id: String,
    },
    /// Save a frames JSON file as a tactic.
    Save {
        /// Tactic name.
        #[arg(long)]
        name: String,
        /// Input frames JSON.
        #[arg(long = "in")]
        in_path: PathBuf,
        /// Tactic category.
        #[arg(long, value_enum, default_value_t = KindChoice::Formation)]
        kind: KindChoice,
        /// Owning scope (academy id).
        #[arg(long)]
        scope: Option<String>,
        /// Free-text description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete one tactic.
    Delete {
        /// Tactic id.
        id: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Formation,
    Drill,
    SetPiece,
}

impl From<KindChoice> for TacticKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Formation => TacticKind::Formation,
            KindChoice::Drill => TacticKind::Drill,
            KindChoice::SetPiece => TacticKind::SetPiece,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => BoardConfig::from_path(path)?,
        None => BoardConfig::default(),
    };

    match cli.cmd {
        Command::Chain(args) => cmd_chain(&cfg, args),
        Command::Scenario(args) => cmd_scenario(&cfg, args),
        Command::Replay(args) => cmd_replay(&cfg, args),
        Command::Tactics(args) => cmd_tactics(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse JSON '{}'", path.display()))
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_chain(cfg: &BoardConfig, args: ChainArgs) -> anyhow::Result<()> {
    let poses: Vec<Pose> = read_json(&args.in_path)?;
    let rate = match args.rate {
        Some(hz) => pitchboard::SampleRate::new(hz)?,
        None => cfg.sample_rate,
    };
    let frames = pitchboard::chain_animation_at(&poses, args.step_ms, rate)?;
    write_json(&frames, args.out.as_deref())
}

fn cmd_scenario(cfg: &BoardConfig, args: ScenarioArgs) -> anyhow::Result<()> {
    let mut composer = TacticComposer::new(ScriptedScenario::with_params(cfg.scenario.clone()));
    if let Some(cmd) = args.model_cmd {
        let model = TextModelGenerator::new(shell_completion(cmd)).with_board(cfg.board);
        composer = composer
            .with_primary(Arc::new(model))
            .with_timeout(Duration::from_millis(args.timeout_ms));
    }

    let generated = composer.compose(&args.prompt);
    eprintln!(
        "{} frames ({:?})",
        generated.frames.len(),
        generated.source
    );
    write_json(&generated.frames, args.out.as_deref())
}

fn shell_completion(cmd: String) -> impl Fn(&str) -> anyhow::Result<String> + Send + Sync {
    move |prompt: &str| {
        let mut child = Process::new("sh")
            .arg("-c")
            .arg(&cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("spawn model command '{cmd}'"))?;
        child
            .stdin
            .take()
            .context("model command stdin")?
            .write_all(prompt.as_bytes())
            .context("send prompt to model command")?;
        let out = child.wait_with_output().context("wait for model command")?;
        if !out.status.success() {
            anyhow::bail!("model command exited with {}", out.status);
        }
        String::from_utf8(out.stdout).context("model reply is not UTF-8")
    }
}

fn cmd_replay(cfg: &BoardConfig, args: ReplayArgs) -> anyhow::Result<()> {
    let frames: Vec<Frame> = read_json(&args.in_path)?;
    let total = frames.len();

    let board = LiveBoard::new(Scene::with_bounds(Vec::new(), cfg.board));
    let mut driver = BoardDriver::new(board, cfg.tick_interval())?;
    driver.load_frames(frames)?;
    driver.play()?;

    let deadline = playback_deadline(Instant::now(), cfg.tick_interval(), total);
    let report = Duration::from_millis(args.report_ms.max(1));
    while driver.state()? == BoardState::Playing {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            driver.stop()?;
            anyhow::bail!("playback did not finish in time");
        }
        let p = driver.progress()?;
        eprintln!("frame {}/{}", p.index + 1, p.total);
        std::thread::sleep(report);
    }
    driver.wait_idle(Duration::ZERO)?;

    let scene = driver.with_board(|b| b.scene().snapshot())?;
    eprintln!("played {total} frames");
    write_json(&scene, None)
}

/// Latest instant a playback of `frames` ticks may end: one tick per frame plus slack.
/// `None` when the budget does not fit in an `Instant`, meaning no deadline.
fn playback_deadline(start: Instant, interval: Duration, frames: usize) -> Option<Instant> {
    let ticks = u32::try_from(frames).ok()?.checked_add(1)?;
    let budget = interval
        .checked_mul(ticks)?
        .checked_mul(2)?
        .checked_add(Duration::from_secs(1))?;
    start.checked_add(budget)
}

fn cmd_tactics(args: TacticsArgs) -> anyhow::Result<()> {
    let mut store = JsonFileTacticStore::open(&args.store)?;
    match args.action {
        TacticsAction::Seed => {
            let n = pitchboard::seed_presets(&mut store)?;
            eprintln!("seeded {n} presets into {}", store.path().display());
        }
        TacticsAction::List { scope } => {
            for t in store.list(scope.as_deref())? {
                println!(
                    "{}\t{:?}\t{}\t{} frames\t{}",
                    t.id,
                    t.kind,
                    if t.is_preset { "preset" } else { "custom" },
                    t.frames.len(),
                    t.name
                );
            }
        }
        TacticsAction::Show { id } => {
            let tactic = store.get(&TacticId(id))?;
            write_json(&tactic, None)?;
        }
        TacticsAction::Save {
            name,
            in_path,
            kind,
            scope,
            description,
        } => {
            let frames: Vec<Frame> = read_json(&in_path)?;
            let mut tactic = NewTactic::new(name, kind.into(), scope, frames);
            tactic.description = description;
            let id = store.create(tactic)?;
            println!("{id}");
        }
        TacticsAction::Delete { id } => {
            let id = TacticId(id);
            store.delete(&id)?;
            eprintln!("deleted {id}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/bin/pitchboard.rs"]
mod tests;
