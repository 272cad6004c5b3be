//! Map rendering of endpoints and routes.

mod config;
mod map;
mod recording;
mod renderer;

pub use config::MapConfig;
pub use map::{LayerId, LineStyle, MapSurface, MarkerStyle};
pub use recording::{Layer, RecordingMap, Viewport};
pub use renderer::RouteRenderer;
