pub mod hit;
pub mod layout;

pub use hit::{Hit, hit_test};
pub use layout::{ApproxMeasure, TagLayout, TextMeasure, layout_board, layout_tag};
