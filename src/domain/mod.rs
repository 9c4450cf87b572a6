// Domain layer: pure data shared by client and server
pub mod models;
