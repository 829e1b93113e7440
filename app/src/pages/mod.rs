//! Page components assembled by the router.

mod blog;
mod home;
mod not_found;

pub use blog::BlogPage;
pub use home::HomePage;
pub use not_found::NotFound;
