//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use yamdb_core::{Category, Comment, Genre, Review, Taxon, Title, User};

use super::responses::{CommentResponse, ReviewResponse, TaxonResponse, TitleResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            role: user.role,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl TaxonResponse {
    pub fn from_taxon<T: Taxon>(taxon: &T) -> Self {
        Self {
            name: taxon.name().to_string(),
            slug: taxon.slug().to_string(),
        }
    }
}

impl From<&Category> for TaxonResponse {
    fn from(category: &Category) -> Self {
        Self::from_taxon(category)
    }
}

impl From<&Genre> for TaxonResponse {
    fn from(genre: &Genre) -> Self {
        Self::from_taxon(genre)
    }
}

impl From<&Title> for TitleResponse {
    fn from(title: &Title) -> Self {
        Self {
            id: title.id,
            name: title.name.clone(),
            year: title.year,
            rating: title.rating.map(|r| r.value()),
            description: title.description.clone(),
            genre: title.genres.iter().map(TaxonResponse::from).collect(),
            category: title.category.as_ref().map(TaxonResponse::from),
        }
    }
}

impl From<Title> for TitleResponse {
    fn from(title: Title) -> Self {
        Self::from(&title)
    }
}

// ============================================================================
// Review & Comment Mappers
// ============================================================================

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            title: review.title_name,
            text: review.text,
            author: review.author_username,
            score: review.score.get(),
            pub_date: review.pub_date,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            author: comment.author_username,
            pub_date: comment.pub_date,
            review: comment.review_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use yamdb_core::{Rating, Score};

    #[test]
    fn test_title_mapping_embeds_taxonomy() {
        let title = Title {
            id: 4,
            name: "Stalker".to_string(),
            year: Some(1979),
            description: None,
            category: Some(Category::from_parts(1, "Film".to_string(), "film".to_string())),
            genres: vec![Genre::from_parts(2, "Drama".to_string(), "drama".to_string())],
            rating: Rating::from_scores([Score::new(8).unwrap(), Score::new(9).unwrap()]),
        };

        let response = TitleResponse::from(&title);
        assert_eq!(response.category.unwrap().slug, "film");
        assert_eq!(response.genre[0].name, "Drama");
        assert_eq!(response.rating, Some(8.5));
    }

    #[test]
    fn test_review_mapping_uses_names() {
        let review = Review {
            id: 10,
            title_id: 4,
            title_name: "Stalker".to_string(),
            author_id: 7,
            author_username: "critic".to_string(),
            text: "Slow and great".to_string(),
            score: Score::new(9).unwrap(),
            pub_date: Utc::now(),
        };

        let response = ReviewResponse::from(review);
        assert_eq!(response.title, "Stalker");
        assert_eq!(response.author, "critic");
        assert_eq!(response.score, 9);
    }

    #[test]
    fn test_comment_mapping_references_review() {
        let comment = Comment {
            id: 3,
            review_id: 10,
            author_id: 7,
            author_username: "critic".to_string(),
            text: "Agreed".to_string(),
            pub_date: Utc::now(),
        };
        assert_eq!(CommentResponse::from(comment).review, 10);
    }
}
