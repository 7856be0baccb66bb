//! Summary-text rendering and parsing.
//!
//! `summary_text` is the de facto wire format between the engine and every
//! exporter: one `Key: value` pair per line, split on the first colon. Both
//! halves of that contract live here so the format has exactly one owner.

use crate::pack::PackDesign;

/// Render the fixed-order, line-oriented summary of a pack design.
///
/// Section order: configuration, chemistry, rated/nominal voltage,
/// capacity, energy, cycle life, then the optional IR block,
/// recommendation, warning, and runtime lines. Exporters depend on both
/// the order and the `Key: value` line shape.
pub fn render_pack_summary(d: &PackDesign) -> String {
    let mut out = format!(
        "Configuration: {}S{}P\n\
         Chemistry: {}\n\
         Rated Voltage: {:.2} V\n\
         Nominal Voltage: {:.2} V\n\
         Rated Capacity: {:.2} Ah\n\
         Total Energy: {:.2} kWh ({:.2} Wh)\n\
         Estimated Cycle Life: {} cycles @ {}% DOD\n",
        d.series_cells,
        d.parallel_cells,
        d.chemistry,
        d.rated_voltage_v,
        d.total_voltage_v,
        d.total_capacity_ah,
        d.total_energy_wh / 1000.0,
        d.total_energy_wh,
        d.cycle_life_estimate,
        d.dod_percent,
    );

    if let Some(ir) = &d.ir_info {
        out.push_str(&format!(
            "Pack IR: {:.2} mΩ\n\
             Voltage Sag @ {:.1}C: {:.2} V\n\
             Max Power @ {:.1}C: {:.2} kW\n",
            ir.pack_ir_milliohm, d.c_rate, ir.voltage_sag_v, d.c_rate, ir.max_power_kw,
        ));
    }
    if let Some(bms) = &d.bms_recommendation {
        out.push_str(&format!("Recommendation: {bms}\n"));
    }
    if let Some(warning) = &d.warning {
        out.push_str(&format!("Warning: {warning}\n"));
    }
    if let Some(ir) = &d.ir_info {
        if ir.runtime_hours > 0 {
            out.push_str(&format!("Runtime (hrs): {}\n", ir.runtime_hours));
        }
    }

    out
}

/// Split a summary into `(key, value)` pairs, one per line, on the first
/// colon. Lines without a colon are skipped. This is the exact convention
/// every exporter of the original tool applied independently.
pub fn parse_fields(summary: &str) -> Vec<(String, String)> {
    summary
        .lines()
        .filter_map(|line| {
            line.split_once(':')
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
