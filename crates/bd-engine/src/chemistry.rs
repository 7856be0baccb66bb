//! Battery chemistry definitions and lookup tables.
//!
//! The lookup tables here (base cycle counts and safe cell-voltage ceilings)
//! are part of the engine's observable contract: unknown chemistries fall
//! back to documented defaults rather than erroring, and the raw label the
//! caller supplied flows through to rendered output unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base cycle count assumed for a chemistry outside the known set.
pub const DEFAULT_BASE_CYCLES: u32 = 500;

/// Safe cell-voltage ceiling assumed for a chemistry outside the known set (V).
pub const DEFAULT_MAX_CELL_VOLTAGE: f64 = 4.2;

/// Battery cell chemistry.
///
/// `Other` carries an arbitrary caller-supplied label so unrecognized
/// chemistries pass through the engine permissively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chemistry {
    /// Lithium-ion (generic cobalt/NMC class)
    LiIon,
    /// Lithium iron phosphate
    LiFePo4,
    /// Flooded or sealed lead acid
    LeadAcid,
    /// Nickel-metal hydride
    NiMh,
    /// Unrecognized chemistry label, kept verbatim
    Other(String),
}

impl Chemistry {
    pub const KNOWN: [Chemistry; 4] = [
        Chemistry::LiIon,
        Chemistry::LiFePo4,
        Chemistry::LeadAcid,
        Chemistry::NiMh,
    ];

    /// Display label, matching the labels the original front ends used.
    pub fn label(&self) -> &str {
        match self {
            Chemistry::LiIon => "Li-ion",
            Chemistry::LiFePo4 => "LiFePO4",
            Chemistry::LeadAcid => "Lead Acid",
            Chemistry::NiMh => "NiMH",
            Chemistry::Other(label) => label,
        }
    }

    /// Rated cycle count at 100% depth of discharge.
    pub fn base_cycle_life(&self) -> u32 {
        match self {
            Chemistry::LiIon => 500,
            Chemistry::LiFePo4 => 2000,
            Chemistry::LeadAcid => 300,
            Chemistry::NiMh => 500,
            Chemistry::Other(_) => DEFAULT_BASE_CYCLES,
        }
    }

    /// Maximum safe per-cell voltage (V). Advisory only.
    pub fn max_cell_voltage(&self) -> f64 {
        match self {
            Chemistry::LiIon => 4.2,
            Chemistry::LiFePo4 => 3.65,
            Chemistry::LeadAcid => 2.45,
            Chemistry::NiMh => 1.5,
            Chemistry::Other(_) => DEFAULT_MAX_CELL_VOLTAGE,
        }
    }
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Chemistry {
    type Err = std::convert::Infallible;

    /// Parsing is total: anything outside the known set becomes `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chem = match s.trim().to_uppercase().as_str() {
            "LI-ION" | "LIION" | "LITHIUM-ION" | "LITHIUM ION" => Chemistry::LiIon,
            "LIFEPO4" | "LFP" => Chemistry::LiFePo4,
            "LEAD ACID" | "LEAD-ACID" | "SLA" => Chemistry::LeadAcid,
            "NIMH" => Chemistry::NiMh,
            _ => Chemistry::Other(s.to_string()),
        };
        Ok(chem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cycles_match_table() {
        assert_eq!(Chemistry::LiIon.base_cycle_life(), 500);
        assert_eq!(Chemistry::LiFePo4.base_cycle_life(), 2000);
        assert_eq!(Chemistry::LeadAcid.base_cycle_life(), 300);
        assert_eq!(Chemistry::NiMh.base_cycle_life(), 500);
        assert_eq!(
            Chemistry::Other("unknown".into()).base_cycle_life(),
            DEFAULT_BASE_CYCLES
        );
    }

    #[test]
    fn safety_ceilings_match_table() {
        assert_eq!(Chemistry::LiIon.max_cell_voltage(), 4.2);
        assert_eq!(Chemistry::LiFePo4.max_cell_voltage(), 3.65);
        assert_eq!(Chemistry::LeadAcid.max_cell_voltage(), 2.45);
        assert_eq!(Chemistry::NiMh.max_cell_voltage(), 1.5);
        assert_eq!(
            Chemistry::Other("NaS".into()).max_cell_voltage(),
            DEFAULT_MAX_CELL_VOLTAGE
        );
    }

    #[test]
    fn parse_known_labels_and_aliases() {
        assert_eq!("Li-ion".parse::<Chemistry>().unwrap(), Chemistry::LiIon);
        assert_eq!("lifepo4".parse::<Chemistry>().unwrap(), Chemistry::LiFePo4);
        assert_eq!("LFP".parse::<Chemistry>().unwrap(), Chemistry::LiFePo4);
        assert_eq!(
            "Lead Acid".parse::<Chemistry>().unwrap(),
            Chemistry::LeadAcid
        );
        assert_eq!("NiMH".parse::<Chemistry>().unwrap(), Chemistry::NiMh);
    }

    #[test]
    fn parse_keeps_unknown_label_verbatim() {
        let chem = "Sodium-ion".parse::<Chemistry>().unwrap();
        assert_eq!(chem, Chemistry::Other("Sodium-ion".to_string()));
        assert_eq!(chem.label(), "Sodium-ion");
    }

    #[test]
    fn display_matches_front_end_labels() {
        assert_eq!(Chemistry::LiIon.to_string(), "Li-ion");
        assert_eq!(Chemistry::LiFePo4.to_string(), "LiFePO4");
        assert_eq!(Chemistry::LeadAcid.to_string(), "Lead Acid");
        assert_eq!(Chemistry::NiMh.to_string(), "NiMH");
    }
}
