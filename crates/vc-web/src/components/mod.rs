//! Reusable components

mod cards;
mod checker;
mod nav;
mod result_panel;

pub use cards::*;
pub use checker::Checker;
pub use nav::SiteNav;
pub use result_panel::ResultPanel;
