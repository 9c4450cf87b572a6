pub mod home;
pub mod notifications;
pub mod profile;

pub use home::Home;
pub use notifications::Notifications;
pub use profile::Profile;
