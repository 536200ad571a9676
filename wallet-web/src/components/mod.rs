//! UI Components

pub mod allocation_card;
pub mod allocation_modal;
pub mod connect_button;
pub mod navbar;
pub mod network_banner;
pub mod owner_dashboard;
pub mod user_dashboard;

pub use allocation_card::AllocationCard;
pub use allocation_modal::AllocationModal;
pub use connect_button::ConnectButton;
pub use navbar::Navbar;
pub use network_banner::NetworkBanner;
pub use owner_dashboard::OwnerDashboard;
pub use user_dashboard::UserDashboard;
