pub mod header;
pub mod footer;
pub mod skeleton;
pub mod empty_state;
pub mod book_grid;
pub mod book_card;
