//! Font Awesome icon glyph fragments.
//!
//! Raw markup, embedded verbatim inside the control buttons so the glyphs
//! render as live `<i>` elements rather than escaped text.

pub const ZOOM_IN: &str = r#"<i class="fa fa-search-plus icon-style"></i>"#;
pub const ZOOM_OUT: &str = r#"<i class="fa fa-search-minus icon-style"></i>"#;
pub const ZOOM_RESET: &str = r#"<i class="fa fa-refresh icon-style"></i>"#;
pub const JUMP_BEGINNING: &str = r#"<i class="fa fa-step-backward icon-style"></i>"#;
pub const SHIFT_LEFT: &str = r#"<i class="fa fa-arrow-left icon-style"></i>"#;
pub const SHIFT_RIGHT: &str = r#"<i class="fa fa-arrow-right icon-style"></i>"#;
pub const JUMP_END: &str = r#"<i class="fa fa-step-forward icon-style"></i>"#;
