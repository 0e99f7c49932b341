// Client side of the portfolio page: the animated particle background plus
// the small helpers the page calls into (theme, avatar eyes, contribution
// graph data). Everything browser specific is only built for wasm32.

extern crate nalgebra_glm as glm;

mod utils;

pub mod animation;
pub mod avatar;
pub mod color;
pub mod config;
pub mod contributions;
pub mod error;
pub mod field;
pub mod logging;
pub mod particle;
pub mod scheduler;
pub mod surface;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod background;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

use wasm_bindgen::prelude::*;

pub use crate::animation::{FieldLoop, Host, LoopState, StaticHost};
pub use crate::config::{FieldConfig, PageConfig};
pub use crate::error::{FieldError, Result};
pub use crate::field::{FrameStats, ParticleField};
pub use crate::particle::Particle;
pub use crate::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use crate::surface::{DrawCommand, RecordingSurface, Surface};
pub use crate::theme::Theme;

#[cfg(target_arch = "wasm32")]
pub use crate::background::BackgroundField;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook and console logging. Safe to call more than once;
/// only the first call's config is used.
#[wasm_bindgen]
pub fn initialize(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json)?,
        None => PageConfig::default(),
    };
    logging::init(config.level());
    Ok(())
}
