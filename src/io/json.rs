use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::analysis::MissionAnalysis;
use crate::classify::{classify, OrbitClass, OrbitProfile};
use crate::error::Result;
use crate::physics::OrbitParams;
use crate::satellite::Satellite;

/// Full result set for one satellite, as exported to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub satellite: Satellite,
    pub params: OrbitParams,
    pub orbit_class: OrbitClass,
    pub orbit_label: String,
    pub profile: OrbitProfile,
    pub analysis: MissionAnalysis,
}

impl Report {
    pub fn build(satellite: &Satellite) -> Result<Self> {
        let params = satellite.params()?;
        let class = classify(params.altitude_km);
        Ok(Report {
            satellite: satellite.clone(),
            params,
            orbit_class: class,
            orbit_label: class.label(),
            profile: class.profile(),
            analysis: MissionAnalysis::evaluate(&params),
        })
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report_file(path: impl AsRef<Path>, report: &Report) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, report)
}
