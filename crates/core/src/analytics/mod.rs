//! Analytics module - spending by category, monthly trends and weekday averages.

mod analytics_model;
mod analytics_service;

#[cfg(test)]
mod analytics_service_tests;

pub use analytics_model::{CategorySpending, DayOfWeekAverage, MonthlyTrend};
pub use analytics_service::{
    aggregate_day_of_week_averages, aggregate_monthly_trends, aggregate_spending_by_category,
    AnalyticsService, AnalyticsServiceTrait,
};
