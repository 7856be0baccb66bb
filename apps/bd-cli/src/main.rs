use clap::{Parser, Subcommand};

use bd_engine::{
    BankRequest, CellSpec, Chemistry, Connection, PackRequest, PackTopology, design_bank,
    design_pack, estimate_cycle_life, service_years,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "bd-cli")]
#[command(about = "Battery pack and bank design calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Design a battery pack from a cell spec and wiring topology
    Pack {
        /// Nominal per-cell voltage in volts
        #[arg(long, required_unless_present = "preset_18650")]
        cell_voltage: Option<f64>,
        /// Per-cell capacity in amp-hours
        #[arg(long, required_unless_present = "preset_18650")]
        cell_capacity: Option<f64>,
        /// Per-cell internal resistance in milliohms (0 disables IR output)
        #[arg(long, default_value_t = 0.0)]
        cell_ir: f64,
        /// Cell chemistry (Li-ion, LiFePO4, Lead Acid, NiMH)
        #[arg(long, default_value = "LiFePO4")]
        chemistry: String,
        /// Connection type: series, parallel, or series-parallel
        #[arg(long, default_value = "series")]
        connection: String,
        /// Total number of cells
        #[arg(long, default_value_t = 1)]
        cells: u32,
        /// Cells per series string (series-parallel only)
        #[arg(long)]
        series: Option<u32>,
        /// Parallel strings (series-parallel only)
        #[arg(long)]
        parallel: Option<u32>,
        /// Discharge rate for power and sag estimates
        #[arg(long, default_value_t = 5.0)]
        c_rate: f64,
        /// Depth of discharge percentage
        #[arg(long, default_value_t = 80)]
        dod: u32,
        /// Start from the reference 18650 Li-ion cell
        #[arg(long)]
        preset_18650: bool,
        /// Emit the full design as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Size an energy bank out of fixed-capacity modules
    Bank {
        /// Target stored energy in kWh
        #[arg(long)]
        target_kwh: f64,
        /// Capacity of one module in kWh
        #[arg(long)]
        module_kwh: f64,
        /// Module chemistry
        #[arg(long, default_value = "LiFePO4")]
        chemistry: String,
        /// Depth of discharge percentage
        #[arg(long, default_value_t = 100)]
        dod: u32,
        /// Emit the design as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Estimate cycle life for a chemistry and depth of discharge
    CycleLife {
        /// Cell chemistry
        chemistry: String,
        /// Depth of discharge percentage
        #[arg(default_value_t = 100)]
        dod: u32,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            cell_voltage,
            cell_capacity,
            cell_ir,
            chemistry,
            connection,
            cells,
            series,
            parallel,
            c_rate,
            dod,
            preset_18650,
            json,
        } => {
            let chem = parse_chemistry(&chemistry);
            let cell = if preset_18650 {
                CellSpec::preset_18650()
            } else {
                CellSpec::new(
                    cell_voltage.unwrap_or_default(),
                    cell_capacity.unwrap_or_default(),
                    cell_ir,
                    chem,
                )
            };
            let topology = match connection.parse::<Connection>()? {
                Connection::Series => PackTopology::series(cells),
                Connection::Parallel => PackTopology::parallel(cells),
                Connection::SeriesParallel => PackTopology::series_parallel(
                    cells,
                    series.unwrap_or_default(),
                    parallel.unwrap_or_default(),
                ),
            };
            let req = PackRequest::new(cell, topology)
                .with_c_rate(c_rate)
                .with_dod(dod);
            cmd_pack(&req, json)
        }
        Commands::Bank {
            target_kwh,
            module_kwh,
            chemistry,
            dod,
            json,
        } => cmd_bank(target_kwh, module_kwh, &chemistry, dod, json),
        Commands::CycleLife { chemistry, dod } => cmd_cycle_life(&chemistry, dod),
    }
}

fn parse_chemistry(label: &str) -> Chemistry {
    // Chemistry parsing is total; unknown labels pass through verbatim.
    let Ok(chem) = label.parse::<Chemistry>();
    if matches!(chem, Chemistry::Other(_)) {
        tracing::warn!(label, "unrecognized chemistry, using default tables");
    }
    chem
}

fn cmd_pack(req: &PackRequest, json: bool) -> CliResult<()> {
    let design = design_pack(req)?;

    if design.topology_mismatch {
        tracing::warn!(
            series = design.series_cells,
            parallel = design.parallel_cells,
            cells = req.topology.num_cells,
            "series x parallel does not match the total cell count"
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&design)?);
    } else {
        print!("{}", design.summary_text);
    }
    Ok(())
}

fn cmd_bank(
    target_kwh: f64,
    module_kwh: f64,
    chemistry: &str,
    dod: u32,
    json: bool,
) -> CliResult<()> {
    let req = BankRequest::new(target_kwh, module_kwh)
        .with_chemistry(parse_chemistry(chemistry))
        .with_dod(dod);
    let design = design_bank(&req)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&design)?);
    } else {
        println!("{}", design.summary_text);
    }
    Ok(())
}

fn cmd_cycle_life(chemistry: &str, dod: u32) -> CliResult<()> {
    let chem = parse_chemistry(chemistry);
    let cycles = estimate_cycle_life(&chem, dod);
    let years = service_years(cycles, 1.0);

    println!("Estimated Cycle Life: {cycles} cycles @ {dod}% DOD");
    println!("Service estimate: {years:.2} years at one cycle per day");
    Ok(())
}
