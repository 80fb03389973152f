#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod allocation;
pub mod catalog;
pub mod error;
pub mod exercise;
pub mod filter;
pub mod name;
pub mod plan;
pub mod progress;
pub mod sequence;
pub mod service;
pub mod settings;

pub use allocation::*;
pub use catalog::Catalog;
pub use error::*;
pub use exercise::*;
pub use filter::*;
pub use name::*;
pub use plan::*;
pub use progress::*;
pub use sequence::*;
pub use service::*;
pub use settings::*;

#[cfg(test)]
mod tests {
    pub mod data;
}
