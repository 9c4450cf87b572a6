// Utility modules
pub mod debounce;

pub use debounce::{Debouncer, sleep, with_timeout};
