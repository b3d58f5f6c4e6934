use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use roster_ics::{
    EmployeeName, EventMaterializer, ParsedRoster, ResolvedConfig, RosterConfig,
    calendar_file_name, logging, parse_roster, render_calendar, write_roster_csv,
    write_roster_json,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Turn a plain-text work roster into per-employee calendar files")]
#[command(version)]
struct Args {
    /// TOML file with roster settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the year appended to header dates
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Override the IANA timezone used for shift times
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the header dates and every employee found in the roster
    Names { roster: PathBuf },
    /// Write one employee's shifts as an .ics file
    Calendar {
        roster: PathBuf,
        #[arg(long)]
        employee: String,
        /// Directory for the calendar file
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Dump the parsed roster
    Export {
        roster: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

fn load_config(args: &Args) -> Result<ResolvedConfig> {
    let mut config = match &args.config {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RosterConfig::default(),
    };
    if let Some(year) = args.year {
        config.default_year = year;
    }
    if let Some(timezone) = &args.timezone {
        config.timezone = timezone.clone();
    }
    Ok(config.resolve()?)
}

fn read_roster(path: &Path, config: &ResolvedConfig) -> Result<ParsedRoster> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster text from {}", path.display()))?;
    Ok(parse_roster(&text, config)?)
}

fn print_names(roster: &ParsedRoster) {
    let dates = roster
        .dates()
        .iter()
        .map(|d| d.format("%m/%d").to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Dates    : {dates}");
    for name in roster.employee_names() {
        match roster.rejected().get(name.as_str()) {
            Some(err) => println!("  {name}  (unreadable: {err})"),
            None => {
                let shifts = roster.schedules().get(name.as_str()).map_or(0, |s| s.len());
                println!("  {name}  ({shifts} shifts)");
            }
        }
    }
}

fn write_calendar(
    roster: &ParsedRoster,
    config: &ResolvedConfig,
    employee: &str,
    out: &Path,
) -> Result<()> {
    let materializer = EventMaterializer::from_config(config);
    let events = roster.materialize(employee, &materializer)?;
    let name = EmployeeName::new(employee);

    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;
    let path = out.join(calendar_file_name(&name));
    fs::write(&path, render_calendar(&name, &events))
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {} shifts to {}", events.len(), path.display());
    Ok(())
}

fn export(roster: &ParsedRoster, format: ExportFormat, out: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = match out {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match format {
        ExportFormat::Json => write_roster_json(roster, writer)?,
        ExportFormat::Csv => write_roster_csv(roster, writer)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    match &args.command {
        Command::Names { roster } => {
            let roster = read_roster(roster, &config)?;
            if roster.employee_names().is_empty() {
                bail!("no employee rows found");
            }
            print_names(&roster);
        }
        Command::Calendar {
            roster,
            employee,
            out,
        } => {
            let roster = read_roster(roster, &config)?;
            write_calendar(&roster, &config, employee, out)?;
        }
        Command::Export {
            roster,
            format,
            out,
        } => {
            let roster = read_roster(roster, &config)?;
            export(&roster, *format, out.as_deref())?;
        }
    }
    Ok(())
}
