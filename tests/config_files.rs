use anyhow::Result;
use satellite_orbit_sim::config::AppConfig;
use satellite_orbit_sim::OrbitError;
use tempfile::TempDir;

/// A full configuration file overrides every section.
#[test]
fn loads_full_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("orbit.toml");
    std::fs::write(
        &path,
        r#"
[satellite]
name = "Hubble"
mass_kg = 11110.0
altitude_km = 547.0

[bounds.mass]
min = 10.0
max = 20000.0
step = 50.0

[bounds.altitude]
min = 200.0
max = 50000.0
step = 5.0

[display]
window_width = 1600.0
window_height = 900.0

[animation]
fps = 30
speed = 2.0
"#,
    )?;

    let config = AppConfig::load(&path)?;
    assert_eq!(config.satellite.name, "Hubble");
    assert_eq!(config.satellite.altitude_km, 547.0);
    assert_eq!(config.bounds.mass.step, 50.0);
    assert_eq!(config.bounds.altitude.max, 50000.0);
    assert_eq!(config.display.window_width, 1600.0);
    assert_eq!(config.animation.fps, 30);
    assert_eq!(config.animation.speed, 2.0);
    // Keys left out fall back to defaults
    assert_eq!(config.animation.speed_max, 10.0);
    Ok(())
}

#[test]
fn empty_file_gives_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "")?;

    assert_eq!(AppConfig::load(&path)?, AppConfig::default());
    Ok(())
}

#[test]
fn malformed_toml_is_a_toml_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[satellite\nmass_kg = ")?;

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, OrbitError::Toml(_)), "got {:?}", err);
    Ok(())
}

#[test]
fn out_of_bounds_default_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("oob.toml");
    std::fs::write(
        &path,
        r#"
[satellite]
altitude_km = 120000.0
"#,
    )?;

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, OrbitError::Config { .. }), "got {:?}", err);
    assert!(err.to_string().contains("altitude_km"));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, OrbitError::Io(_)), "got {:?}", err);
}

#[test]
fn no_path_means_defaults() -> Result<()> {
    assert_eq!(AppConfig::load_or_default(None)?, AppConfig::default());
    Ok(())
}
