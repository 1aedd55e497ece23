pub mod assemble;
pub mod dashboard;
pub mod deliver;
pub mod rank_news;
pub mod rank_stocks;
pub mod schedule;
