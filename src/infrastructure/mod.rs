pub mod news_api;
