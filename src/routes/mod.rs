pub mod health;
pub mod items;
pub mod root;
pub mod search;
