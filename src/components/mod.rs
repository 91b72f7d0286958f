pub mod counter;
pub mod faq;
pub mod nav;
pub mod reveal;
pub mod waitlist;
