#![allow(clippy::explicit_auto_deref)]
#![warn(clippy::unwrap_used)]

#[macro_use]
extern crate serde;

pub mod app;
pub mod logger;
pub mod sheet;
pub mod telegram;
pub mod utils;
