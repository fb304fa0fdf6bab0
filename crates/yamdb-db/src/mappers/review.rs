//! Review model -> entity mapper

use yamdb_core::{DomainError, Review, Score};

use crate::models::ReviewModel;

impl TryFrom<ReviewModel> for Review {
    type Error = DomainError;

    fn try_from(model: ReviewModel) -> Result<Self, Self::Error> {
        Ok(Review {
            id: model.id,
            title_id: model.title_id,
            title_name: model.title_name,
            author_id: model.author_id,
            author_username: model.author_username,
            text: model.text,
            score: Score::new(model.score)?,
            pub_date: model.pub_date,
        })
    }
}
