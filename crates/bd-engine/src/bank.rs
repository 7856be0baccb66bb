//! Bank designer: module counts for a target energy store.

use serde::{Deserialize, Serialize};

use crate::chemistry::Chemistry;
use crate::cycle_life::estimate_cycle_life;
use crate::error::{DesignError, DesignResult, check_finite};

/// Default depth of discharge for bank designs (%).
pub const DEFAULT_BANK_DOD: u32 = 100;

/// Request to size an energy bank out of fixed-capacity modules.
#[derive(Debug, Clone)]
pub struct BankRequest {
    pub target_energy_kwh: f64,
    pub module_capacity_kwh: f64,
    pub chemistry: Chemistry,
    pub dod_percent: u32,
}

impl BankRequest {
    pub fn new(target_energy_kwh: f64, module_capacity_kwh: f64) -> Self {
        Self {
            target_energy_kwh,
            module_capacity_kwh,
            chemistry: Chemistry::LiFePo4,
            dod_percent: DEFAULT_BANK_DOD,
        }
    }

    pub fn with_chemistry(mut self, chemistry: Chemistry) -> Self {
        self.chemistry = chemistry;
        self
    }

    pub fn with_dod(mut self, dod_percent: u32) -> Self {
        self.dod_percent = dod_percent;
        self
    }
}

/// Immutable snapshot of a completed bank design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDesign {
    pub modules_needed: u32,
    pub cycle_life_estimate: u32,
    pub chemistry: Chemistry,
    pub dod_percent: u32,
    pub summary_text: String,
}

/// Compute the module count and cycle life for an energy bank.
///
/// Module counts use true ceiling division. Rejects non-finite inputs and
/// a non-positive module capacity, which would otherwise divide by zero.
pub fn design_bank(req: &BankRequest) -> DesignResult<BankDesign> {
    check_finite(req.target_energy_kwh, "target energy")?;
    check_finite(req.module_capacity_kwh, "module capacity")?;
    if req.module_capacity_kwh <= 0.0 {
        return Err(DesignError::InvalidArg {
            what: "module capacity must be positive",
        });
    }

    let modules_needed = (req.target_energy_kwh / req.module_capacity_kwh).ceil().max(0.0) as u32;
    let cycle_life_estimate = estimate_cycle_life(&req.chemistry, req.dod_percent);

    let summary_text = format!(
        "modules_needed: {}, cycle_life: {} cycles @ {}% DOD",
        modules_needed, cycle_life_estimate, req.dod_percent
    );

    Ok(BankDesign {
        modules_needed,
        cycle_life_estimate,
        chemistry: req.chemistry.clone(),
        dod_percent: req.dod_percent,
        summary_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_needs_exact_count() {
        let design = design_bank(&BankRequest::new(20.0, 5.0)).unwrap();
        assert_eq!(design.modules_needed, 4);
    }

    #[test]
    fn remainder_rounds_up() {
        let design = design_bank(&BankRequest::new(21.0, 5.0)).unwrap();
        assert_eq!(design.modules_needed, 5);
    }

    #[test]
    fn fractional_kwh_uses_true_ceiling() {
        // The original's integer idiom floor((e + c - 1) / c) would give 2
        // here; true ceiling gives 3.
        let design = design_bank(&BankRequest::new(2.5, 1.0)).unwrap();
        assert_eq!(design.modules_needed, 3);
    }

    #[test]
    fn default_bank_cycle_life_is_lifepo4_full_discharge() {
        let design = design_bank(&BankRequest::new(20.0, 5.0)).unwrap();
        assert_eq!(design.cycle_life_estimate, 2000);
        assert_eq!(
            design.summary_text,
            "modules_needed: 4, cycle_life: 2000 cycles @ 100% DOD"
        );
    }

    #[test]
    fn dod_and_chemistry_flow_through() {
        let design = design_bank(
            &BankRequest::new(10.0, 5.0)
                .with_chemistry(Chemistry::LeadAcid)
                .with_dod(40),
        )
        .unwrap();
        assert_eq!(design.cycle_life_estimate, 600);
    }

    #[test]
    fn non_positive_module_capacity_rejected() {
        assert!(matches!(
            design_bank(&BankRequest::new(20.0, 0.0)),
            Err(DesignError::InvalidArg { .. })
        ));
        assert!(matches!(
            design_bank(&BankRequest::new(20.0, -5.0)),
            Err(DesignError::InvalidArg { .. })
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(matches!(
            design_bank(&BankRequest::new(f64::NAN, 5.0)),
            Err(DesignError::NonFinite { .. })
        ));
        assert!(matches!(
            design_bank(&BankRequest::new(20.0, f64::INFINITY)),
            Err(DesignError::NonFinite { .. })
        ));
    }

    #[test]
    fn idempotent_for_identical_requests() {
        let req = BankRequest::new(21.0, 5.0).with_dod(80);
        assert_eq!(design_bank(&req).unwrap(), design_bank(&req).unwrap());
    }
}
