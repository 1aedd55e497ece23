pub mod news_item;
pub mod ranked;
pub mod report;
pub mod stock_item;
