mod device_table;
mod group_table;
mod modal;
mod nav;
mod stat_card;
mod toast;
mod user_table;

pub use device_table::DeviceTable;
pub use group_table::GroupTable;
pub use modal::Modal;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::{ToastContainer, use_toasts};
pub use user_table::UserTable;
