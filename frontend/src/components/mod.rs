pub mod guard;
pub mod layout;
pub mod logo;
pub mod marquee;
