pub mod analysis;
pub mod classify;
pub mod config;
pub mod display;
pub mod error;
pub mod io;
pub mod logging;
pub mod physics;
pub mod satellite;
pub mod sim;

pub use analysis::MissionAnalysis;
pub use classify::{classify, OrbitClass};
pub use config::AppConfig;
pub use error::{OrbitError, Result};
pub use physics::OrbitParams;
pub use satellite::{presets, Satellite};
