pub mod app;
pub mod sim;

pub use app::{run_app, AppError, LoopConfig, LoopMetricsSnapshot};
pub use sim::{
    generate, ArtworkBarrier, ArtworkSlot, BenchObstacle, CameraPose, CaptureFlag, ConfigError,
    FlatFloor, GallerySimulation, GroundProbe, GroundState, InputSnapshot, InputTracker,
    PlayerState, RoomBounds, RoomGeometry, SceneNode, SimConfig, SimError, WallSide,
};
