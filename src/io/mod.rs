pub mod csv;
pub mod json;

pub use self::csv::{altitude_sweep, write_sweep, write_sweep_file, SweepRow};
pub use self::json::{write_report, write_report_file, Report};
