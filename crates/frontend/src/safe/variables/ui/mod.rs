pub mod card;
pub mod grid;
pub mod page;
pub mod viewer;
