#![no_std]

extern crate alloc;

pub use action::*;
pub use args::*;
pub use config::*;
pub use error::*;
pub use face::*;
pub use gesture::*;
pub use widget::*;

mod action;
mod args;
mod config;
mod error;
mod face;
mod gesture;
mod widget;
