use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scriptura", version, about = "Bible reading plans and progress")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the books of the canon.
    Books(BooksArgs),
    /// Print the reading plan.
    Plan(PlanArgs),
    /// Show the reading for a date (default: today).
    Today(TodayArgs),
    /// Flip the completion state of one chapter, e.g. "Genesis-1".
    Toggle(UnitArgs),
    /// Mark one chapter complete (or incomplete with --undo).
    Mark(MarkArgs),
    /// Print aggregate progress.
    Status(StatusArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Period granularity: "day" or "month".
    #[arg(long, global = true)]
    kind: Option<scriptura::PeriodKind>,

    /// Number of periods.
    #[arg(long, global = true)]
    horizon: Option<u32>,

    /// Chapters per period: a positive number or "auto".
    #[arg(long = "per", global = true)]
    units_per_period: Option<scriptura::UnitsPerPeriod>,

    /// Progress file.
    #[arg(long, global = true)]
    progress: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BooksArgs {
    /// Emit JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Emit JSON.
    #[arg(long)]
    json: bool,

    /// Show per-book sub-ranges instead of the summary title.
    #[arg(long)]
    detail: bool,
}

#[derive(Args, Debug)]
struct TodayArgs {
    /// Date as YYYY-MM-DD.
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct UnitArgs {
    /// Unit id, "<book>-<chapter>".
    unit: String,
}

#[derive(Args, Debug)]
struct MarkArgs {
    /// Unit id, "<book>-<chapter>".
    unit: String,

    /// Mark incomplete instead.
    #[arg(long)]
    undo: bool,
}

#[derive(Args, Debug)]
struct StatusArgs {
    /// Emit JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scriptura=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = resolve_config(&cli.common)?;
    let canon = scriptura::Canon::standard();

    match cli.cmd {
        Command::Books(args) => cmd_books(&canon, args),
        Command::Plan(args) => cmd_plan(&canon, &cfg, args),
        Command::Today(args) => cmd_today(&canon, &cfg, args),
        Command::Toggle(args) => cmd_toggle(&canon, &cfg, args),
        Command::Mark(args) => cmd_mark(&canon, &cfg, args),
        Command::Status(args) => cmd_status(&canon, &cfg, args),
    }
}

fn resolve_config(common: &CommonArgs) -> anyhow::Result<scriptura::PlanConfig> {
    let mut cfg = match &common.config {
        Some(path) => scriptura::PlanConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => scriptura::PlanConfig::default(),
    };
    if let Some(kind) = common.kind {
        cfg.kind = kind;
    }
    if let Some(horizon) = common.horizon {
        cfg.horizon = Some(horizon);
    }
    if let Some(per) = common.units_per_period {
        cfg.units_per_period = per;
    }
    if let Some(path) = &common.progress {
        cfg.progress_path = path.clone();
    }
    Ok(cfg)
}

fn build_plan(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
) -> anyhow::Result<scriptura::Schedule> {
    let options = cfg.plan_options()?;
    Ok(scriptura::generate_plan(canon, &options)?)
}

fn open_tracker(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
) -> scriptura::ProgressTracker<scriptura::JsonFileStore> {
    scriptura::ProgressTracker::open(
        canon,
        scriptura::JsonFileStore::new(cfg.progress_path.clone()),
    )
}

fn cmd_books(canon: &scriptura::Canon, args: BooksArgs) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(canon.list_books())?);
        return Ok(());
    }
    for book in canon.list_books() {
        println!(
            "{:<16} {:>3}  {}",
            book.name,
            book.chapters,
            book.category.label()
        );
    }
    println!("total chapters: {}", canon.total_chapters());
    Ok(())
}

fn cmd_plan(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
    args: PlanArgs,
) -> anyhow::Result<()> {
    let plan = build_plan(canon, cfg)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }
    for period in &plan.periods {
        let title = if args.detail {
            scriptura::detailed_title(&period.units)
        } else {
            period.title.clone()
        };
        println!("{:<10} {title}", period.label);
    }
    if plan.unscheduled > 0 {
        eprintln!(
            "warning: {} chapters do not fit in {} periods of {}",
            plan.unscheduled, plan.horizon, plan.units_per_period
        );
    }
    eprintln!("fingerprint {}", plan.fingerprint());
    Ok(())
}

fn cmd_today(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
    args: TodayArgs,
) -> anyhow::Result<()> {
    let plan = build_plan(canon, cfg)?;
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let Some(period) = scriptura::period_for_date(&plan, date) else {
        println!("{date}: the plan has no reading scheduled");
        return Ok(());
    };

    let tracker = open_tracker(canon, cfg);
    let progress = tracker.period_progress(period);
    println!(
        "{date}: {} - {} ({}/{})",
        period.label, period.title, progress.done, progress.total
    );
    for unit in &period.units {
        let mark = if tracker.is_complete(&unit.id()) {
            'x'
        } else {
            ' '
        };
        println!("  [{mark}] {unit}");
    }
    Ok(())
}

fn cmd_toggle(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
    args: UnitArgs,
) -> anyhow::Result<()> {
    let tracker = open_tracker(canon, cfg);
    let id = scriptura::UnitId::from_raw(args.unit);
    let now_complete = tracker
        .toggle(&id)
        .with_context(|| format!("toggle '{id}'"))?;
    println!(
        "{id}: {}",
        if now_complete { "complete" } else { "not complete" }
    );
    Ok(())
}

fn cmd_mark(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
    args: MarkArgs,
) -> anyhow::Result<()> {
    let tracker = open_tracker(canon, cfg);
    let id = scriptura::UnitId::from_raw(args.unit);
    let changed = tracker
        .set_complete(&id, !args.undo)
        .with_context(|| format!("mark '{id}'"))?;
    let state = if args.undo { "not complete" } else { "complete" };
    if changed {
        println!("{id}: {state}");
    } else {
        println!("{id}: already {state}");
    }
    Ok(())
}

fn cmd_status(
    canon: &scriptura::Canon,
    cfg: &scriptura::PlanConfig,
    args: StatusArgs,
) -> anyhow::Result<()> {
    let plan = build_plan(canon, cfg)?;
    let tracker = open_tracker(canon, cfg);
    let summary = tracker.summary(&plan);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!(
        "{}% ({}/{} chapters), {}/{} periods complete",
        summary.percentage,
        summary.completed,
        summary.total,
        summary.periods_complete,
        summary.periods_total
    );
    if let Some(next) = summary.next_period.and_then(|i| plan.period(i)) {
        println!("next: {} - {}", next.label, next.title);
    }
    Ok(())
}
