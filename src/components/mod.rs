pub mod accessibility;
pub mod cards;
pub mod carousel;
pub mod feature_tabs;
pub mod hero;
pub mod navbar;
pub mod page;
pub mod reveal;
pub mod ripple;
pub mod waitlist_form;
