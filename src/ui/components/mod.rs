//! Reusable UI components

mod banner;
mod button;

pub use banner::{banner_height, render_banner, BannerKind};
pub use button::{render_submit_button, BUTTON_HEIGHT};
