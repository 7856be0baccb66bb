//! Cell specifications.

use bd_core::units::{Capacity, Resistance, Voltage, amp_hour, milliohm, volt};

use crate::chemistry::Chemistry;

/// Specification of a single cell, the building block of every pack.
#[derive(Debug, Clone)]
pub struct CellSpec {
    /// Nominal per-cell voltage
    pub voltage: Voltage,
    /// Rated capacity
    pub capacity: Capacity,
    /// Internal resistance; zero disables the IR/power estimates
    pub internal_resistance: Resistance,
    pub chemistry: Chemistry,
}

impl CellSpec {
    /// Build a cell spec from the conventional datasheet units (V, Ah, mΩ).
    pub fn new(voltage_v: f64, capacity_ah: f64, ir_milliohm: f64, chemistry: Chemistry) -> Self {
        Self {
            voltage: volt(voltage_v),
            capacity: amp_hour(capacity_ah),
            internal_resistance: milliohm(ir_milliohm),
            chemistry,
        }
    }

    /// Reference 18650 Li-ion cell (3.7 V, 2.5 Ah, 45 mΩ).
    pub fn preset_18650() -> Self {
        Self::new(3.7, 2.5, 45.0, Chemistry::LiIon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_core::units::{in_amp_hours, in_milliohms, in_volts};

    #[test]
    fn new_carries_datasheet_units() {
        let cell = CellSpec::new(3.2, 100.0, 50.0, Chemistry::LiFePo4);
        assert_eq!(in_volts(cell.voltage), 3.2);
        assert_eq!(in_amp_hours(cell.capacity), 100.0);
        assert!((in_milliohms(cell.internal_resistance) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn preset_18650_is_liion() {
        let cell = CellSpec::preset_18650();
        assert_eq!(cell.chemistry, Chemistry::LiIon);
        assert_eq!(in_volts(cell.voltage), 3.7);
    }
}
