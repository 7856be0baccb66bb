//! Pack designer: series/parallel sizing, energy, cycle life, IR estimates.

use serde::{Deserialize, Serialize};

use bd_core::units::{in_amp_hours, in_milliohms, in_volts};

use crate::cell::CellSpec;
use crate::chemistry::Chemistry;
use crate::cycle_life::estimate_cycle_life;
use crate::error::{DesignResult, check_finite};
use crate::summary;
use crate::topology::PackTopology;

/// Default discharge rate used for power and voltage-sag estimates.
pub const DEFAULT_C_RATE: f64 = 5.0;

/// Default depth of discharge for pack designs (%).
pub const DEFAULT_PACK_DOD: u32 = 80;

/// Advisory attached to any design with more than one cell in series.
pub const BMS_RECOMMENDATION: &str =
    "Use a BMS with cell balancing and over/under-voltage protection.";

/// A pack design request: one cell spec, a wiring topology, and the
/// operating assumptions for the cycle-life and power estimates.
#[derive(Debug, Clone)]
pub struct PackRequest {
    pub cell: CellSpec,
    pub topology: PackTopology,
    /// Discharge rate for the IR branch (multiples of capacity)
    pub c_rate: f64,
    pub dod_percent: u32,
}

impl PackRequest {
    pub fn new(cell: CellSpec, topology: PackTopology) -> Self {
        Self {
            cell,
            topology,
            c_rate: DEFAULT_C_RATE,
            dod_percent: DEFAULT_PACK_DOD,
        }
    }

    pub fn with_c_rate(mut self, c_rate: f64) -> Self {
        self.c_rate = c_rate;
        self
    }

    pub fn with_dod(mut self, dod_percent: u32) -> Self {
        self.dod_percent = dod_percent;
        self
    }
}

/// Internal-resistance derived figures, present only when the cell spec
/// carries a positive internal resistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrInfo {
    pub pack_ir_milliohm: f64,
    pub voltage_sag_v: f64,
    pub max_power_kw: f64,
    pub max_current_a: f64,
    /// Whole hours of runtime at the assumed discharge rate
    pub runtime_hours: u32,
}

/// Immutable snapshot of a completed pack design.
///
/// Scalar fields use the domain's conventional units (V, Ah, Wh) with
/// unit-suffixed names. `summary_text` is the line-oriented `Key: value`
/// rendering that downstream exporters parse by splitting each line on the
/// first colon; its field order and format are a compatibility contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackDesign {
    pub series_cells: u32,
    pub parallel_cells: u32,
    /// Declared series x parallel disagreed with the total cell count
    pub topology_mismatch: bool,
    pub chemistry: Chemistry,
    pub dod_percent: u32,
    pub c_rate: f64,
    pub total_voltage_v: f64,
    pub rated_voltage_v: f64,
    pub total_capacity_ah: f64,
    pub total_energy_wh: f64,
    pub cycle_life_estimate: u32,
    pub ir_info: Option<IrInfo>,
    pub warning: Option<String>,
    pub bms_recommendation: Option<String>,
    pub summary_text: String,
}

/// Compute a full pack design.
///
/// Fails only on invalid input (unknown connection type, missing
/// series-parallel counts, non-finite numbers). Everything advisory
/// (safety ceiling, topology
/// mismatch, unknown chemistry or DOD) lands in the returned snapshot.
pub fn design_pack(req: &PackRequest) -> DesignResult<PackDesign> {
    let cell_voltage = in_volts(req.cell.voltage);
    let cell_capacity = in_amp_hours(req.cell.capacity);
    check_finite(cell_voltage, "cell voltage")?;
    check_finite(cell_capacity, "cell capacity")?;
    check_finite(in_milliohms(req.cell.internal_resistance), "cell internal resistance")?;
    check_finite(req.c_rate, "c-rate")?;

    let resolved = req.topology.resolve()?;
    let series = resolved.series as f64;
    let parallel = resolved.parallel as f64;

    let total_voltage = cell_voltage * series;
    // Fixed empirical derate applied once per cell, not per string.
    let nominal_voltage = cell_voltage - 0.2;
    let rated_voltage = nominal_voltage * series;
    let total_capacity = cell_capacity * parallel;
    let total_energy_wh = total_voltage * total_capacity;

    let cycle_life_estimate = estimate_cycle_life(&req.cell.chemistry, req.dod_percent);

    let cell_ir_ohm = in_milliohms(req.cell.internal_resistance) / 1000.0;
    let ir_info = if cell_ir_ohm > 0.0 {
        let pack_ir_ohm = cell_ir_ohm * series / parallel;
        let max_current_a = total_capacity * req.c_rate;
        let voltage_sag_v = pack_ir_ohm * max_current_a;
        let max_power_w = (total_voltage - voltage_sag_v) * max_current_a;
        let runtime_hours = if max_current_a > 0.0 {
            (total_capacity / max_current_a).floor() as u32
        } else {
            0
        };
        Some(IrInfo {
            pack_ir_milliohm: pack_ir_ohm * 1000.0,
            voltage_sag_v,
            max_power_kw: max_power_w / 1000.0,
            max_current_a,
            runtime_hours,
        })
    } else {
        None
    };

    let max_cell_v = req.cell.chemistry.max_cell_voltage();
    let warning = (cell_voltage > max_cell_v).then(|| {
        format!(
            "Cell voltage {}V exceeds safe max {}V for {}",
            cell_voltage, max_cell_v, req.cell.chemistry
        )
    });

    let bms_recommendation =
        (resolved.series > 1).then(|| BMS_RECOMMENDATION.to_string());

    let mut design = PackDesign {
        series_cells: resolved.series,
        parallel_cells: resolved.parallel,
        topology_mismatch: resolved.mismatch,
        chemistry: req.cell.chemistry.clone(),
        dod_percent: req.dod_percent,
        c_rate: req.c_rate,
        total_voltage_v: total_voltage,
        rated_voltage_v: rated_voltage,
        total_capacity_ah: total_capacity,
        total_energy_wh,
        cycle_life_estimate,
        ir_info,
        warning,
        bms_recommendation,
        summary_text: String::new(),
    };
    design.summary_text = summary::render_pack_summary(&design);
    Ok(design)
}
