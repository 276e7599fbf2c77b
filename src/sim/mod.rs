pub mod animator;
pub mod render_loop;

pub use animator::{Animator, Controls, Frame};
pub use render_loop::{Command, FrameSink, LatestFrame, RenderLoop};
