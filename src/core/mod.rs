// Core logic of the Act stage

pub mod asset_loader;
pub mod canvas;
pub mod config;
pub mod cues;
pub mod font;
pub mod progress;
pub mod session;
pub mod skeleton;
pub mod visualizer;
