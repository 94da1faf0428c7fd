pub mod camera;
pub mod choreography;
pub mod constants;
pub mod filter;
pub mod form;
pub mod grid;
pub mod layout;
pub mod nav;
pub mod scene;
pub mod tween;
pub mod viewport;

pub use camera::Camera;
pub use scene::{AnimationDirector, IconOverlay, SceneConfig, Tile};
pub use viewport::ViewportMetrics;
