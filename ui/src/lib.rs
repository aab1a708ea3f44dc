//! Shared UI crate for Heatplan. Models, state transitions and every view live
//! here; the platform crates only launch it.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod planner;
pub mod theme;
pub mod views;

pub mod components {
    // Brand header with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Generic dialog container (components/modal.rs)
    pub mod modal;
    pub use modal::Modal;
}
