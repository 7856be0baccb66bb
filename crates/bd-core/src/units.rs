// bd-core/src/units.rs

use uom::si::f64::{
    ElectricCharge as UomElectricCharge, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, ElectricalResistance as UomElectricalResistance,
    Energy as UomEnergy, Power as UomPower, Ratio as UomRatio,
};

// Public canonical unit types (SI, f64)
pub type Capacity = UomElectricCharge;
pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Resistance = UomElectricalResistance;
pub type Energy = UomEnergy;
pub type Power = UomPower;
pub type Ratio = UomRatio;

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amp(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn amp_hour(v: f64) -> Capacity {
    use uom::si::electric_charge::ampere_hour;
    Capacity::new::<ampere_hour>(v)
}

#[inline]
pub fn milliohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::milliohm;
    Resistance::new::<milliohm>(v)
}

#[inline]
pub fn watt_hour(v: f64) -> Energy {
    use uom::si::energy::watt_hour;
    Energy::new::<watt_hour>(v)
}

#[inline]
pub fn kilowatt_hour(v: f64) -> Energy {
    use uom::si::energy::kilowatt_hour;
    Energy::new::<kilowatt_hour>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Read a voltage back out in volts.
#[inline]
pub fn in_volts(v: Voltage) -> f64 {
    use uom::si::electric_potential::volt;
    v.get::<volt>()
}

/// Read a capacity back out in amp-hours.
#[inline]
pub fn in_amp_hours(c: Capacity) -> f64 {
    use uom::si::electric_charge::ampere_hour;
    c.get::<ampere_hour>()
}

/// Read a resistance back out in milliohms.
#[inline]
pub fn in_milliohms(r: Resistance) -> f64 {
    use uom::si::electrical_resistance::milliohm;
    r.get::<milliohm>()
}
