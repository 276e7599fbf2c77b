use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::classify::classify;
use crate::error::{OrbitError, Result};
use crate::physics::OrbitParams;

/// One row of an altitude sweep table.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub altitude_km: f64,
    pub radius_km: f64,
    pub velocity_kms: f64,
    pub period_hours: f64,
    pub centripetal_force_n: f64,
    pub orbit_class: &'static str,
}

impl From<&OrbitParams> for SweepRow {
    fn from(p: &OrbitParams) -> Self {
        SweepRow {
            altitude_km: p.altitude_km,
            radius_km: p.radius_km(),
            velocity_kms: p.velocity_kms(),
            period_hours: p.period_hours(),
            centripetal_force_n: p.centripetal_force_n,
            orbit_class: classify(p.altitude_km).code(),
        }
    }
}

/// Evaluate `steps` logarithmically spaced altitudes from `from_km` to `to_km` inclusive.
pub fn altitude_sweep(mass_kg: f64, from_km: f64, to_km: f64, steps: usize) -> Result<Vec<SweepRow>> {
    if steps < 2 {
        return Err(OrbitError::InvalidParameter {
            name: "steps",
            value: steps as f64,
            reason: "need at least two samples",
        });
    }
    if to_km.is_nan() || to_km <= from_km {
        return Err(OrbitError::InvalidParameter {
            name: "to",
            value: to_km,
            reason: "must be above the start altitude",
        });
    }

    let ratio = to_km / from_km;
    (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;
            let alt = if i == steps - 1 { to_km } else { from_km * ratio.powf(t) };
            OrbitParams::compute(mass_kg, alt).map(|p| SweepRow::from(&p))
        })
        .collect()
}

/// Write sweep rows as CSV with a header line.
pub fn write_sweep<W: Write>(writer: W, rows: &[SweepRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_sweep_file(path: impl AsRef<Path>, rows: &[SweepRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_sweep(file, rows)
}
