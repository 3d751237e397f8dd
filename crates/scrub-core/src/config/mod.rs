//! Timeline configuration
//!
//! Visual constants of the timeline (paddings, row height, ruler spacing,
//! colors, font) live in [`TimelineConfig`] so hosts can persist them as YAML.
//!
//! # Usage
//!
//! ```ignore
//! use scrub_core::config::{default_config_path, load_config, save_config, TimelineConfig};
//!
//! let path = default_config_path("timeline.yaml");
//! let config: TimelineConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;
mod timeline;

pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path};
pub use timeline::{ColorConfig, TimelineConfig};
