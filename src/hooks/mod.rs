pub mod use_sidebar_controller;

pub use use_sidebar_controller::use_sidebar_controller;
