// Data models shared across the Act stage

pub mod asset;
pub mod decision;
pub mod frame;
pub mod pose;
