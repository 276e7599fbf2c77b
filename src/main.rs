use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use satellite_orbit_sim::classify::classify;
use satellite_orbit_sim::display::Viewport;
use satellite_orbit_sim::io::{self, Report};
use satellite_orbit_sim::logging;
use satellite_orbit_sim::presets;
use satellite_orbit_sim::sim::{Command, Frame, FrameSink, LatestFrame, RenderLoop};
use satellite_orbit_sim::{AppConfig, Satellite};

#[derive(Parser, Debug)]
#[command(name = "orbit-sim", version, about = "Circular orbit calculator and classifier")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print orbital parameters, classification, and mission analysis
    Report {
        #[command(flatten)]
        satellite: SatelliteArgs,
        /// Also write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Classify one or more altitudes (km)
    Classify {
        #[arg(required = true)]
        altitudes: Vec<f64>,
    },
    /// Tabulate parameters over a log-spaced altitude range
    Sweep {
        #[arg(long, default_value_t = 1000.0)]
        mass: f64,
        #[arg(long, default_value_t = 160.0)]
        from: f64,
        #[arg(long, default_value_t = 100_000.0)]
        to: f64,
        #[arg(long, default_value_t = 25)]
        steps: usize,
        /// CSV output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List reference satellites
    Presets,
    /// Run the animation loop without a window and log its progress
    Animate {
        #[command(flatten)]
        satellite: SatelliteArgs,
        #[arg(long, default_value_t = 3.0)]
        seconds: f64,
        /// Playback speed multiplier
        #[arg(long)]
        speed: Option<f64>,
    },
}

#[derive(Args, Debug)]
struct SatelliteArgs {
    /// Reference satellite (ISS, Hubble, GPS, GEO, Starlink)
    #[arg(long)]
    preset: Option<String>,
    /// Satellite mass, kg
    #[arg(long)]
    mass: Option<f64>,
    /// Altitude above the mean surface, km
    #[arg(long)]
    altitude: Option<f64>,
}

impl SatelliteArgs {
    fn resolve(&self, config: &AppConfig) -> Result<Satellite> {
        let mut sat = match &self.preset {
            Some(name) => Satellite::from(&presets::find(name)?),
            None => config.satellite.clone(),
        };
        if let Some(m) = self.mass {
            sat.mass_kg = m;
        }
        if let Some(h) = self.altitude {
            sat.altitude_km = h;
        }
        sat.params()?;

        let before = sat.clone();
        sat.clamp_to(&config.bounds);
        if sat != before {
            log::warn!(
                "clamped to configured bounds: {:.0} kg @ {:.0} km -> {:.0} kg @ {:.0} km",
                before.mass_kg,
                before.altitude_km,
                sat.mass_kg,
                sat.altitude_km
            );
        }
        Ok(sat)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Report { satellite, json } => {
            let sat = satellite.resolve(&config)?;
            let report = Report::build(&sat)?;
            print_report(&report);
            if let Some(path) = json {
                io::write_report_file(&path, &report)
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("report written to {}", path.display());
            }
        }
        Commands::Classify { altitudes } => {
            for h in altitudes {
                println!("{:>10.1} km  {}", h, classify(h).label());
            }
        }
        Commands::Sweep {
            mass,
            from,
            to,
            steps,
            output,
        } => {
            let rows = io::altitude_sweep(mass, from, to, steps)?;
            match output {
                Some(path) => {
                    io::write_sweep_file(&path, &rows)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("{} rows written to {}", rows.len(), path.display());
                }
                None => io::write_sweep(std::io::stdout().lock(), &rows)?,
            }
        }
        Commands::Presets => {
            println!("  {:<14} {:>10} {:>10}  {}", "name", "alt (km)", "mass (kg)", "purpose");
            println!("  {}", "─".repeat(56));
            for p in presets::ALL {
                println!(
                    "  {:<14} {:>10.0} {:>10.0}  {}",
                    p.name, p.altitude_km, p.mass_kg, p.purpose
                );
            }
        }
        Commands::Animate {
            satellite,
            seconds,
            speed,
        } => animate(&config, satellite.resolve(&config)?, seconds, speed)?,
    }

    Ok(())
}

fn animate(config: &AppConfig, sat: Satellite, seconds: f64, speed: Option<f64>) -> Result<()> {
    let run_for = run_time(seconds)?;
    let viewport = Viewport::from_config(&config.display);
    let fps = config.animation.fps as usize;
    let frames = Arc::new(AtomicUsize::new(0));
    let latest = LatestFrame::new();

    let mut store = latest.clone();
    let counter = Arc::clone(&frames);
    let sink = move |frame: Frame| {
        let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
        if n % fps == 0 {
            log::info!(
                "frame {:>5}  angle {:>6.1} deg  r={:.0}px  trail={}",
                n,
                frame.angle.to_degrees(),
                frame.display_radius,
                frame.trail.len()
            );
        }
        store.publish(frame);
    };

    let mut render = RenderLoop::spawn(sat, viewport, config.animation.clone(), sink)?;
    if let Some(s) = speed {
        render.send(Command::SetSpeed(s))?;
    }
    render.send(Command::Toggle)?;
    std::thread::sleep(run_for);
    render.stop();

    let total = frames.load(Ordering::Relaxed);
    match latest.get() {
        Some(f) => println!(
            "  {} frames, final angle {:.1} deg, speed {:.2}x, display radius {:.0}px ({:.1}x Earth)",
            total,
            f.angle.to_degrees(),
            f.speed,
            f.display_radius,
            f.display_radius / f.viewport.earth_radius
        ),
        None => println!("  no frames rendered"),
    }
    Ok(())
}

/// Wall-clock run time for `animate`. Values a `Duration` cannot hold are an error.
fn run_time(seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds)
        .with_context(|| format!("--seconds {} is not a usable duration", seconds))
}

fn print_report(report: &Report) {
    let p = &report.params;
    let a = &report.analysis;

    println!();
    println!("====================================================================");
    println!("  SATELLITE ORBIT: {}", report.satellite.name);
    println!("====================================================================");
    println!();
    println!("  Orbital Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>12.0} kg     Altitude:   {:>10.1} km",
        p.mass_kg, p.altitude_km
    );
    println!(
        "  Radius:        {:>12.1} km     Velocity:   {:>10.3} km/s",
        p.radius_km(),
        p.velocity_kms()
    );
    println!(
        "  Period:        {:>12.2} h      ({:.1} min)",
        p.period_hours(),
        p.period_minutes()
    );
    println!(
        "  Force:         {:>12.0} N      g at alt:   {:>10.3} m/s^2",
        p.centripetal_force_n, p.gravity_ms2
    );
    println!(
        "  Escape vel:    {:>12.3} km/s   Energy:     {:>10.3e} J",
        p.escape_velocity_ms / 1000.0,
        p.orbital_energy_j
    );
    println!();
    println!("  Classification");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {}  -  {}", report.orbit_label, report.profile.description);
    println!("  Verdict: {}", a.headline);
    println!("  Examples: {}", report.profile.examples.join(", "));
    println!();
    for line in a.to_string().lines() {
        println!("  {}", line);
    }
    println!("====================================================================");
    println!();
}
