pub mod analyzer;
pub mod assign;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod flip;
pub mod gallery;
pub mod hex;
pub mod item;
pub mod paint;
pub mod preload;
mod render;
pub mod view;

pub use analyzer::*;
pub use assign::*;
pub use cluster::*;
pub use config::*;
pub use error::*;
pub use flip::*;
pub use gallery::*;
pub use hex::*;
pub use item::*;
pub use paint::*;
pub use preload::*;
pub use view::*;
