pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod firefly;
pub mod geometry;
pub mod pointer;
pub mod projector;
pub mod scene;
pub mod spotlight;

pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use firefly::*;
pub use geometry::*;
pub use pointer::*;
pub use projector::*;
pub use scene::*;
pub use spotlight::*;
