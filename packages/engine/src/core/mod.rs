//! Core building blocks shared by every system

pub mod math;

#[path = "utils/console.rs"]
#[macro_use]
pub mod console;
