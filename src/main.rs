//! ESCM command line interface
//!
//! Runs policy scenarios through the energy scenario climate model.
//!
//! # Usage
//!
//! ```bash
//! escm simulate --set carbon_price=100 --set renewables_subsidy=50 --format table
//! escm simulate --scenario scenario.json --parameters model.toml --output projection.json
//! escm parameters > model.toml
//! escm levers
//! ```

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use escm::boundary::{simulate, SimulationRequest, SimulationResponse};
use escm::model::ClimateModel;
use escm::parameters::ModelParameters;
use escm::scenario::Scenario;
use escm::sources::EnergySource;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Energy scenario climate model
#[derive(Parser, Debug)]
#[command(name = "escm")]
#[command(about = "Project energy mix, emissions, CO2 and temperature under policy scenarios")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario
    Simulate {
        /// JSON file with lever values; missing levers default to 0
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Override a lever, e.g. `--set carbon_price=100`
        #[arg(long = "set", value_name = "LEVER=VALUE")]
        levers: Vec<String>,

        /// TOML file with model parameters
        #[arg(short, long)]
        parameters: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the default model parameters as TOML
    Parameters,
    /// List the scenario levers and their documented ranges
    Levers,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match args.command {
        Command::Simulate {
            scenario,
            levers,
            parameters,
            output,
            format,
        } => {
            let scenario = load_scenario(scenario, &levers)?;
            let model = load_model(parameters)?;
            let response = simulate(&model, &SimulationRequest { scenario })?;

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&response)?,
                Format::Table => render_table(&response),
            };
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Wrote projection");
                }
                None => println!("{}", rendered),
            }
        }
        Command::Parameters => {
            print!("{}", ModelParameters::default().to_toml_string()?);
        }
        Command::Levers => {
            for (lever, (lower, upper)) in Scenario::LEVERS {
                println!("{:<30} [{}, {}]", lever, lower, upper);
            }
        }
    }
    Ok(())
}

fn load_scenario(path: Option<PathBuf>, overrides: &[String]) -> anyhow::Result<Scenario> {
    let mut scenario = match path {
        Some(path) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Invalid scenario in {}", path.display()))?
        }
        None => Scenario::default(),
    };

    for item in overrides {
        let (lever, value) = item
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected LEVER=VALUE, got {}", item))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}", lever))?;
        scenario.set_lever(lever.trim(), value)?;
    }
    Ok(scenario)
}

fn load_model(path: Option<PathBuf>) -> anyhow::Result<ClimateModel> {
    let parameters = match path {
        Some(path) => ModelParameters::from_file(&path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => ModelParameters::default(),
    };
    Ok(ClimateModel::new(parameters)?)
}

fn render_table(response: &SimulationResponse) -> String {
    let mut lines = Vec::new();

    let mut header = format!("{:>6}", "year");
    for source in EnergySource::ALL {
        header.push_str(&format!(" {:>10}", source.name()));
    }
    header.push_str(&format!(" {:>10} {:>8} {:>7}", "emissions", "co2", "temp"));
    lines.push(header);

    for row in response.projection.rows() {
        let mut line = format!("{:>6}", row.year);
        for (_, quantity) in row.energy.iter() {
            line.push_str(&format!(" {:>10.2}", quantity));
        }
        line.push_str(&format!(
            " {:>10.2} {:>8.1} {:>7.2}",
            row.emissions, row.co2_concentration, row.global_temp
        ));
        lines.push(line);
    }

    if let Some(summary) = &response.summary {
        lines.push(String::new());
        lines.push(format!(
            "Temperature in {}: {:.2} degC (peak {:.2} degC in {})",
            summary.final_year,
            summary.final_temperature,
            summary.peak_temperature,
            summary.peak_temperature_year
        ));
        lines.push(format!(
            "CO2 concentration in {}: {:.1} ppm",
            summary.final_year, summary.final_co2_concentration
        ));
        lines.push(format!(
            "Cumulative net emissions: {:.0} GtCO2",
            summary.cumulative_emissions
        ));
    }
    lines.join("\n")
}
