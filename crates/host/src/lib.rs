// vcd-web-host library
// Axum HTTP host serving the rendered waveform-viewer UI

// Configuration
pub mod config;

// Page and API routes
pub mod api;

// Embedded static assets (single-binary distribution)
pub mod embedded;
