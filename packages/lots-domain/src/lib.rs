pub mod normalize;
pub mod participants;

pub use normalize::normalize_query;
pub use participants::{clean_label, order_participants};
