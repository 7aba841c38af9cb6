mod cases;
mod error;
mod output;

use crate::cases::CaseReport;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, emit};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sw_core::units::{to_degc, to_mmhg};
use sw_project::{ColumnCaseDef, FeedDef, ReactorCaseDef, RefluxDef};
use sw_props::{Substance, filter_catalog, parse_pressure, parse_temperature};
use sw_reactor::{Kinetics, RateParams, ReactorStage};
use sw_vle::{EquilibriumModel, RaoultBinary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stagewise")]
#[command(about = "Stagewise - vapor pressure, binary VLE, McCabe-Thiele and Levenspiel sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog substances matching a query
    Substances {
        /// Name, id or alias fragment (lists everything when omitted)
        query: Option<String>,
    },
    /// Vapor pressure at a temperature
    Psat {
        substance: String,
        /// Temperature with units, e.g. 80C, 353.15 K, 176F (bare number: °C)
        temperature: String,
    },
    /// Boiling point at a pressure
    Tboil {
        substance: String,
        /// Pressure with units, e.g. 760 mmHg, 101.325 kPa (bare number: mmHg)
        #[arg(default_value = "1 atm")]
        pressure: String,
    },
    /// T-x-y table of an ideal binary
    Txy {
        light: String,
        heavy: String,
        #[arg(long, default_value = "1 atm")]
        pressure: String,
        #[arg(long, default_value_t = 11)]
        points: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// McCabe-Thiele stage count and staircase
    Mccabe(MccabeArgs),
    /// Size a train of ideal reactors on the Levenspiel plot
    Levenspiel {
        #[arg(long, default_value = "langmuir_hinshelwood")]
        kinetics: Kinetics,
        #[arg(long, default_value_t = RateParams::default().k)]
        k: f64,
        #[arg(long = "ca0", default_value_t = RateParams::default().c_a0)]
        c_a0: f64,
        /// Reactor as KIND:X, e.g. cstr:0.4 (repeat, in flow order)
        #[arg(long = "stage", required = true)]
        stages: Vec<ReactorStage>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run every case in a YAML or JSON case file
    Run {
        case_path: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct MccabeArgs {
    light: String,
    heavy: String,
    /// Feed light-component mole fraction
    #[arg(long)]
    xf: f64,
    /// Distillate light-component mole fraction
    #[arg(long)]
    xd: f64,
    /// Bottoms light-component mole fraction
    #[arg(long)]
    xb: f64,
    /// Reflux ratio L/D
    #[arg(long, conflicts_with = "reflux_factor", required_unless_present = "reflux_factor")]
    reflux: Option<f64>,
    /// Reflux as a multiple of the minimum reflux ratio
    #[arg(long)]
    reflux_factor: Option<f64>,
    /// Feed quality (default 1, saturated liquid)
    #[arg(long, conflicts_with = "feed_temp")]
    q: Option<f64>,
    /// Feed temperature with units; q follows from bubble and dew points
    #[arg(long)]
    feed_temp: Option<String>,
    #[arg(long, default_value = "1 atm")]
    pressure: String,
    /// Use a constant relative volatility instead of Raoult's law
    #[arg(long)]
    alpha: Option<f64>,
    #[arg(long)]
    max_stages: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Substances { query } => cmd_substances(query.as_deref().unwrap_or("")),
        Commands::Psat {
            substance,
            temperature,
        } => cmd_psat(&substance, &temperature),
        Commands::Tboil {
            substance,
            pressure,
        } => cmd_tboil(&substance, &pressure),
        Commands::Txy {
            light,
            heavy,
            pressure,
            points,
            format,
            output,
        } => cmd_txy(&light, &heavy, &pressure, points, format, output.as_deref()),
        Commands::Mccabe(args) => cmd_mccabe(args),
        Commands::Levenspiel {
            kinetics,
            k,
            c_a0,
            stages,
            format,
            output,
        } => cmd_levenspiel(
            ReactorCaseDef {
                name: "levenspiel".to_string(),
                kinetics,
                k,
                c_a0,
                reactors: stages,
            },
            format,
            output.as_deref(),
        ),
        Commands::Run {
            case_path,
            format,
            output,
        } => cmd_run(&case_path, format, output.as_deref()),
    }
}

fn cmd_substances(query: &str) -> CliResult<()> {
    let entries = filter_catalog(query);
    if entries.is_empty() {
        println!("No substances match '{}'", query);
        return Ok(());
    }

    println!(
        "{:<12} {:<14} {:>10}  {:<18} aliases",
        "id", "name", "Tb [°C]", "Antoine [°C]"
    );
    for entry in entries {
        let antoine = entry.substance.antoine();
        let tb = entry
            .normal_boiling_point()
            .map(|t| format!("{:.2}", to_degc(t)))
            .unwrap_or_else(|| "-".to_string());
        let range = format!("{} to {}", antoine.t_min_c, antoine.t_max_c);
        println!(
            "{:<12} {:<14} {:>10}  {:<18} {}",
            entry.canonical_id,
            entry.display_name,
            tb,
            range,
            entry.aliases.join(", ")
        );
    }
    Ok(())
}

fn cmd_psat(substance: &str, temperature: &str) -> CliResult<()> {
    let substance: Substance = substance.parse()?;
    let t = parse_temperature(temperature)?;
    let p = substance.psat(t);
    println!(
        "Psat({}, {:.2} °C) = {:.3} mmHg ({:.4} kPa)",
        substance.display_name(),
        to_degc(t),
        to_mmhg(p),
        p.value / 1000.0
    );
    Ok(())
}

fn cmd_tboil(substance: &str, pressure: &str) -> CliResult<()> {
    let substance: Substance = substance.parse()?;
    let p = parse_pressure(pressure)?;
    let t = substance.boiling_point(p)?;
    println!(
        "Tb({}, {:.3} mmHg) = {:.3} °C ({:.3} K)",
        substance.display_name(),
        to_mmhg(p),
        to_degc(t),
        t.value
    );
    Ok(())
}

fn cmd_txy(
    light: &str,
    heavy: &str,
    pressure: &str,
    points: usize,
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let model = RaoultBinary::new(light.parse()?, heavy.parse()?, parse_pressure(pressure)?)?;
    let curve = model.sample_curve(points)?;
    emit(&output::txy(&curve, format)?, output)
}

fn cmd_mccabe(args: MccabeArgs) -> CliResult<()> {
    let reflux = match (args.reflux, args.reflux_factor) {
        (Some(r), _) => RefluxDef::Ratio(r),
        (None, Some(factor)) => RefluxDef::Factor(factor),
        (None, None) => {
            return Err(CliError::InvalidInput(
                "give --reflux or --reflux-factor".to_string(),
            ));
        }
    };
    let feed = match (args.q, args.feed_temp) {
        (_, Some(t)) => FeedDef::Temperature(t),
        (q, None) => FeedDef::Q(q.unwrap_or(1.0)),
    };
    let case = ColumnCaseDef {
        name: format!("{}/{}", args.light, args.heavy),
        light: args.light,
        heavy: args.heavy,
        pressure: args.pressure,
        alpha: args.alpha,
        x_feed: args.xf,
        x_distillate: args.xd,
        x_bottoms: args.xb,
        feed,
        reflux,
        max_stages: args.max_stages,
    };
    let report = cases::run_column(&case)?;
    emit(&output::column(&report, args.format)?, args.output.as_deref())
}

fn cmd_levenspiel(
    case: ReactorCaseDef,
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let report = cases::run_reactor(&case)?;
    emit(&output::reactor(&report, format)?, output)
}

fn cmd_run(case_path: &Path, format: OutputFormat, output: Option<&Path>) -> CliResult<()> {
    let project = sw_project::load(case_path)?;
    let reports = project
        .cases
        .iter()
        .map(cases::run_case)
        .collect::<CliResult<Vec<CaseReport>>>()?;

    let content = match format {
        OutputFormat::Json => output::json(&reports)?,
        _ => {
            let mut text = String::new();
            for report in &reports {
                text.push_str(&output::case(report, format)?);
                text.push('\n');
            }
            text
        }
    };
    emit(&content, output)
}
