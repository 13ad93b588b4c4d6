//! Entity-Component-System implementation
//!
//! Entities are plain ids, components are a closed set of data records, and
//! systems are run in order by a [`Schedule`] once per frame.

pub mod world;
pub mod entity;
pub mod component;
pub mod system;
pub mod query;
pub mod scheduler;
pub mod components;
pub mod systems;

pub use world::{World, EcsError};
pub use entity::Entity;
pub use component::{Component, ComponentKind, ComponentMask, ComponentType};
pub use system::System;
pub use query::Query;
pub use scheduler::{Schedule, SystemId};
