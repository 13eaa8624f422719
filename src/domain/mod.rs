pub mod user;
pub mod item;
pub mod order;

pub use user::*;
pub use item::*;
pub use order::*;
