mod dashboard;
mod devices;
mod groups;
mod login;
mod not_found;
mod users;

pub use dashboard::Dashboard;
pub use devices::Devices;
pub use groups::Groups;
pub use login::Login;
pub use not_found::NotFound;
pub use users::Users;
