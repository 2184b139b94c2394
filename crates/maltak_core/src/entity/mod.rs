//! Entity records and their in-memory tables.

mod id;
mod model;
mod table;

pub use id::{EntityId, IdSequence};
pub use model::{
    Article, ArticleWithRelations, Category, Comment, NewArticle, NewCategory, NewComment, NewNews,
    NewSubscription, NewTool, NewUser, News, Subscription, Tool, User, DEFAULT_READING_TIME,
    DEFAULT_ROLE,
};
pub use table::{Record, Table};
