pub(crate) type Float = f64;
//Everything is measured in SI units: metres, kilograms, seconds.
pub(crate) const G: Float = 6.67428e-11;
pub(crate) const AU: Float = 149.6e9;
pub(crate) const KM: Float = 1e3;
pub(crate) const SECONDS_PER_DAY: Float = 24. * 3600.;

//One tick advances the simulated clock by a fifth of a day.
pub(crate) const TICKS_PER_DAY: u64 = 5;
pub(crate) const TIMESTEP: Float = SECONDS_PER_DAY / TICKS_PER_DAY as Float;
