#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cardio;
pub mod catalog;
mod error;
mod exercise;
mod generator;
mod name;
mod plan;
mod profile;
pub mod restriction;
pub mod selector;
mod service;
mod settings;
mod student;
mod template;

pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use name::*;
pub use plan::*;
pub use profile::*;
pub use restriction::Restrictions;
pub use service::*;
pub use settings::*;
pub use student::*;
pub use template::*;
