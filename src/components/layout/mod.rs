pub mod admin_layout;
pub mod content_area;
pub mod sidebar;
pub mod top_bar;

pub use admin_layout::AdminLayout;
pub use content_area::ContentArea;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
