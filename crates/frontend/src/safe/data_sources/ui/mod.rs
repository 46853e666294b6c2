pub mod columns;
pub mod list;
pub mod logo;
pub mod page;
pub mod row;
