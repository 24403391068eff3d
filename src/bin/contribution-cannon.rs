use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

use contribution_cannon::{
    ContributionGrid, HexColor, OutputNames, PlaybackClock, RenderConfig, Seconds, Speed,
    StaticVariant, ThemeChoice, ThemePreset,
};

#[derive(Parser, Debug)]
#[command(name = "contribution-cannon", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the animated SVG (and optionally the static one).
    Render(RenderArgs),
    /// Write a static, unanimated SVG.
    Static(StaticArgs),
    /// Rasterize the idle frame of the animated document to PNG.
    Poster(PosterArgs),
    /// Print a JSON summary of what would be rendered.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Calendar JSON (GraphQL response, calendar object, or array of weeks).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Render config JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OverrideArgs {
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    #[arg(long, value_enum)]
    speed: Option<SpeedArg>,

    /// Fill for days without contributions, e.g. `#ebedf0`.
    #[arg(long)]
    empty_color: Option<HexColor>,

    /// Leave out bubbles for days without contributions.
    #[arg(long)]
    hide_empty: bool,

    #[arg(long)]
    max_targets: Option<usize>,

    /// Target document width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Omit the background rectangle.
    #[arg(long)]
    transparent: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Animated SVG path. Defaults to the configured output name.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write the static light SVG here.
    #[arg(long)]
    static_out: Option<PathBuf>,

    /// GitHub login used to derive default output names.
    #[arg(long)]
    user: Option<String>,
}

#[derive(Parser, Debug)]
struct StaticArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = VariantArg::Light)]
    variant: VariantArg,

    /// Leave out bubbles for days without contributions.
    #[arg(long)]
    hide_empty: bool,
}

#[derive(Parser, Debug)]
struct PosterArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Device pixels per document unit.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Also report the playback position this many seconds after load.
    #[arg(long)]
    at: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Default,
    Github,
    Ocean,
    Sunset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpeedArg {
    Fast,
    Normal,
    Slow,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Light,
    Dark,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Static(args) => cmd_static(args),
        Command::Poster(args) => cmd_poster(args),
        Command::Inspect(args) => cmd_inspect(args),
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

fn load(input: &InputArgs) -> anyhow::Result<(ContributionGrid, RenderConfig)> {
    let grid = ContributionGrid::from_path(&input.in_path)
        .with_context(|| format!("load calendar '{}'", input.in_path.display()))?;
    let cfg = match &input.config {
        Some(p) => {
            RenderConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))?
        }
        None => RenderConfig::default(),
    };
    Ok((grid, cfg))
}

fn apply_overrides(cfg: &mut RenderConfig, o: &OverrideArgs) {
    if let Some(t) = o.theme {
        cfg.theme = ThemeChoice::Preset(match t {
            ThemeArg::Default => ThemePreset::Default,
            ThemeArg::Github => ThemePreset::Github,
            ThemeArg::Ocean => ThemePreset::Ocean,
            ThemeArg::Sunset => ThemePreset::Sunset,
        });
    }
    if let Some(s) = o.speed {
        cfg.speed = match s {
            SpeedArg::Fast => Speed::Fast,
            SpeedArg::Normal => Speed::Normal,
            SpeedArg::Slow => Speed::Slow,
        };
    }
    if let Some(c) = o.empty_color {
        cfg.empty_cell_color = c;
    }
    if let Some(n) = o.max_targets {
        cfg.max_targets = n;
    }
    if let Some(w) = o.width {
        cfg.width = w;
    }
    cfg.hide_empty_days |= o.hide_empty;
    cfg.transparent_background |= o.transparent;
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (grid, mut cfg) = load(&args.input)?;
    apply_overrides(&mut cfg, &args.overrides);
    if let Some(user) = &args.user {
        cfg.output = OutputNames::for_user(user)?;
    }

    let synthesis = contribution_cannon::synthesize(&grid, &cfg)?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(&cfg.output.animated));
    write_text(&out, &synthesis.document)?;

    let static_out = args
        .static_out
        .or_else(|| args.user.as_ref().map(|_| PathBuf::from(&cfg.output.static_doc)));
    if let Some(path) = static_out {
        let doc = contribution_cannon::render_static(&grid, &cfg, StaticVariant::Light)?;
        write_text(&path, &doc)?;
    }
    Ok(())
}

fn cmd_static(args: StaticArgs) -> anyhow::Result<()> {
    let (grid, mut cfg) = load(&args.input)?;
    cfg.hide_empty_days |= args.hide_empty;
    let variant = match args.variant {
        VariantArg::Light => StaticVariant::Light,
        VariantArg::Dark => StaticVariant::Dark,
    };
    let doc = contribution_cannon::render_static(&grid, &cfg, variant)?;
    write_text(&args.out, &doc)
}

fn cmd_poster(args: PosterArgs) -> anyhow::Result<()> {
    let (grid, mut cfg) = load(&args.input)?;
    apply_overrides(&mut cfg, &args.overrides);
    let synthesis = contribution_cannon::synthesize(&grid, &cfg)?;
    let poster = contribution_cannon::rasterize(&synthesis.document, args.scale)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    poster.write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (grid, mut cfg) = load(&args.input)?;
    apply_overrides(&mut cfg, &args.overrides);
    let s = contribution_cannon::synthesize(&grid, &cfg)?;
    let (vw, vh) = s.geometry.view_box();

    let playback = match args.at {
        Some(at) => {
            let clock = PlaybackClock::for_schedule(&s.schedule)?;
            Some(clock.snapshot(&s.schedule, Seconds(at)))
        }
        None => None,
    };

    let summary = serde_json::json!({
        "weeks": grid.week_count(),
        "active_days": grid.active_days(),
        "total_contributions": grid.total_contributions(),
        "targets": s.schedule.len(),
        "dropped": s.schedule.dropped(),
        "cell_size": s.geometry.cell_size,
        "radius": s.geometry.radius,
        "view_box": [vw, vh],
        "cycle_duration_s": s.schedule.total_duration(),
        "cycle_period_s": s.schedule.cycle_period(),
        "document_bytes": s.document.len(),
        "sha256": sha256_hex(s.document.as_bytes()),
        "playback": playback,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
