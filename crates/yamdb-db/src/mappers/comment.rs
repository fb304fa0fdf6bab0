//! Comment model -> entity mapper

use yamdb_core::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            review_id: model.review_id,
            author_id: model.author_id,
            author_username: model.author_username,
            text: model.text,
            pub_date: model.pub_date,
        }
    }
}
