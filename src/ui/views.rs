pub mod finance;
pub mod habits;
pub mod home;
pub mod main;
pub mod modals;
pub mod page_detail;
pub mod tasks;
pub mod traits;
