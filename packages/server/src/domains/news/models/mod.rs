mod news_article;

pub use news_article::*;
