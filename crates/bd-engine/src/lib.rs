//! bd-engine: battery pack and bank sizing engine.
//!
//! Pure, stateless design calculations: given a cell spec and a wiring
//! topology, compute pack voltage, capacity, energy, estimated cycle life,
//! internal-resistance figures, and advisory safety output. A smaller bank
//! designer sizes module counts for a target energy store.
//!
//! Every call is an independent synchronous computation with no shared
//! state and no I/O, so the engine is safe to invoke from any number of
//! concurrent callers (web handlers, GUI callbacks, CLI commands).
//!
//! # Example
//!
//! ```
//! use bd_engine::{design_pack, CellSpec, Chemistry, PackRequest, PackTopology};
//!
//! let req = PackRequest::new(
//!     CellSpec::new(3.2, 100.0, 0.0, Chemistry::LiFePo4),
//!     PackTopology::series(4),
//! );
//! let design = design_pack(&req).unwrap();
//! assert_eq!(design.cycle_life_estimate, 2400);
//! println!("{}", design.summary_text);
//! ```

pub mod bank;
pub mod cell;
pub mod chemistry;
pub mod cycle_life;
pub mod error;
pub mod pack;
pub mod summary;
pub mod topology;

// Re-exports
pub use bank::{BankDesign, BankRequest, design_bank};
pub use cell::CellSpec;
pub use chemistry::Chemistry;
pub use cycle_life::{dod_multiplier, estimate_cycle_life, service_years};
pub use error::{DesignError, DesignResult};
pub use pack::{IrInfo, PackDesign, PackRequest, design_pack};
pub use summary::parse_fields;
pub use topology::{Connection, PackTopology, ResolvedTopology};
