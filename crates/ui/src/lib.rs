//! Server-rendered viewer chrome for vcd-web
//!
//! Produces the control panel and page shell markup the host serves.

pub mod controls;
pub mod icons;
pub mod page;

pub use controls::{controls_tree, render_controls, CONTROL_BUTTONS};
pub use page::render_page;
