pub mod scale;

pub use scale::Viewport;
