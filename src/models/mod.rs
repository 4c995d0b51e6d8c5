//! Data models for the Folium catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

pub use author::{Author, NewAuthor};
pub use book::{Book, BookShort, BookSummary};
pub use book_instance::{BookInstance, BookInstanceShort, InstanceStatus};
pub use genre::Genre;
