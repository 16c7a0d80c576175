pub mod chart;
pub mod coins;
pub mod controls;
pub mod guard;
pub mod info;
pub mod loader;
pub mod pagination;
pub mod search;
pub mod template;
pub mod toast;
pub mod topbutton;
