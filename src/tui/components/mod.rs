//! Reusable chrome components: nav bar, status bar, overlays
//!
//! Page sections live in `tui::sections`; everything here is fixed UI
//! around the scrolling page.

pub mod logs_overlay;
pub mod nav_bar;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
