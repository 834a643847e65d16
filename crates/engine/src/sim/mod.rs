mod capture;
mod collision;
mod config;
mod input;
pub mod layout;
mod movement;
mod orientation;
mod player;
mod scene;
mod simulation;
mod vertical;

pub use capture::CaptureFlag;
pub use collision::{position_is_clear, resolve};
pub use config::{ConfigError, SimConfig};
pub use input::{InputSnapshot, InputTracker};
pub use layout::{
    generate, ArtworkBarrier, ArtworkSlot, BenchObstacle, RoomBounds, RoomGeometry, WallSide,
};
pub use player::PlayerState;
pub use scene::{CameraPose, SceneNode};
pub use simulation::{GallerySimulation, SimError};
pub use vertical::{FlatFloor, GroundProbe, GroundState};
