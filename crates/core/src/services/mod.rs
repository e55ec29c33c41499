pub mod chart_service;
pub mod comparison_service;
pub mod currency_service;
pub mod grouping_service;
pub mod household_service;
