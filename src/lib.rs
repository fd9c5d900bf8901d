//! Meal Max - meal battles and a small wildlife tracker

pub mod battle;
pub mod core;
pub mod kitchen;
pub mod tracker;
