pub mod errors;
pub mod constants;
pub mod services;
pub mod utils;

// Structured log helpers (client and server)
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
