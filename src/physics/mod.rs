pub mod circular;
pub mod constants;

pub use circular::{
    centripetal_force, circular_velocity, escape_velocity, gravity_at, orbital_energy,
    orbital_period, orbital_radius, satellite_offset, velocity_direction, OrbitParams,
};
