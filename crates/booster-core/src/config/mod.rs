//! Config templates written over the generator's defaults
//!
//! Both files are regenerated on every run and replace whatever the generator
//! produced; nothing is merged or backed up.

pub mod framework;
pub mod styling;

pub use framework::{write_framework_config, FRAMEWORK_CONFIG, FRAMEWORK_CONFIG_FILE};
pub use styling::{
    render_styling_config, write_styling_config, CONTENT_GLOBS, STYLING_CONFIG_FILE,
};
