mod helpers;
mod news_api;
