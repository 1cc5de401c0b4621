pub mod author;
pub mod news;
