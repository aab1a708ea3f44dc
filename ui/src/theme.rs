//! Shared stylesheet, embedded so both shells render identically without
//! shipping a separate asset.

/// Contents of `ui/assets/theme/main.css`.
pub const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
