pub mod cache;
pub mod chart;
pub mod comparison;
pub mod currency;
pub mod dashboard;
pub mod household;
pub mod normalized;
pub mod rates;
pub mod record;
pub mod settings;
