pub mod dispatch;
pub mod research;
pub mod schema;
pub mod shared;
