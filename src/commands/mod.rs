pub mod categories;
pub mod dishes;
pub mod ingredients;
pub mod periods;
pub mod service;
