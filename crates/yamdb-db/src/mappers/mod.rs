//! Model -> entity mappers

mod comment;
mod review;
mod taxon;
mod title;
mod user;

pub use taxon::taxon_from_model;
pub use title::title_with_genres;
