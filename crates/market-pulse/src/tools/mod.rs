//! Tools the model can call while composing the update

pub mod stock_data;

pub use stock_data::StockDataTool;
