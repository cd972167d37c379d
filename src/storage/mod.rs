pub mod memory;
mod seed;
pub mod users;

pub use memory::{Article, ArticlePatch, NewArticle, NewReview, Review, Store};
pub use users::{NewUser, User, UserPatch, UserStore};
