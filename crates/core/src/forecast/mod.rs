//! Savings forecast - linear projection of months needed to reach a goal.

mod forecast_model;
mod forecast_service;

#[cfg(test)]
mod forecast_service_tests;

pub use forecast_model::SavingsForecast;
pub use forecast_service::{average_monthly_savings, ForecastService, ForecastServiceTrait};
