/*
 * Bird Flock Simulation - Module Definitions
 *
 * The simulation core (bird, bounds, steering, collision, physics) is plain
 * math over a slice of birds and knows nothing about windows. The remaining
 * modules build the nannou application and the headless runner around it.
 */

// Re-export key components for easier access
pub use bird::Bird;
pub use bounds::Bounds;
pub use config::{FlockConfig, PopulationParams, Settings, WindowParams};
pub use physics::{FlockSimulator, TickReport, UpdateMode};
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use app::Model;

// Simulation core
pub mod bird;
pub mod bounds;
pub mod collision;
pub mod config;
pub mod physics;
pub mod population;
pub mod steering;

// Application
pub mod app;
pub mod debug;
pub mod headless;
pub mod input;
pub mod params;
pub mod renderer;
pub mod ui;
