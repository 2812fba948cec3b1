//! The interactive region map core: wires the polygon asset, the
//! relational hierarchy, the derived layers, and the pointer state machine
//! into one host-facing component.

pub mod region_map;

pub use region_map::{Command, MapProps, Notification, RegionMap};
