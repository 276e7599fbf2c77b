use anyhow::Result;
use satellite_orbit_sim::io::{self, Report};
use satellite_orbit_sim::{presets, Satellite};
use tempfile::TempDir;

/// JSON report for a preset lands on disk with the derived fields filled in.
#[test]
fn gps_report_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("gps.json");

    let sat = Satellite::from(&presets::find("gps")?);
    let report = Report::build(&sat)?;
    io::write_report_file(&path, &report)?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(value["satellite"]["name"], "GPS");
    assert_eq!(value["orbit_class"], "MEO");
    let period_s = value["params"]["period_s"].as_f64().unwrap_or_default();
    assert!(
        (period_s / 3600.0 - 11.97).abs() < 0.1,
        "GPS period should be about 12 h, got {:.2} h",
        period_s / 3600.0
    );
    Ok(())
}

/// Sweep CSV has a header plus one row per step, classes in altitude order.
#[test]
fn sweep_csv_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sweep.csv");

    let rows = io::altitude_sweep(1000.0, 160.0, 100_000.0, 30)?;
    io::write_sweep_file(&path, &rows)?;

    let mut reader = csv::Reader::from_path(&path)?;
    let headers = reader.headers()?.clone();
    assert_eq!(headers.get(0), Some("altitude_km"));
    assert_eq!(headers.get(5), Some("orbit_class"));

    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(records.len(), 30);
    assert_eq!(records[0].get(5), Some("LEO"));
    assert_eq!(records[29].get(5), Some("HEO"));

    let velocities: Vec<f64> = records
        .iter()
        .filter_map(|r| r.get(2).and_then(|v| v.parse().ok()))
        .collect();
    assert_eq!(velocities.len(), 30);
    assert!(velocities.windows(2).all(|w| w[1] < w[0]), "velocity must fall with altitude");
    Ok(())
}

#[test]
fn unknown_preset_is_reported() {
    let err = presets::find("Voyager").unwrap_err();
    assert!(err.to_string().contains("Voyager"));
}
