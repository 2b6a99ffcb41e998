use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::forecast_model::SavingsForecast;
use crate::analytics::{AnalyticsServiceTrait, MonthlyTrend};
use crate::errors::{Error, Result};
use crate::goals::GoalServiceTrait;
use crate::utils::amount::{checked_div, checked_sum};

pub trait ForecastServiceTrait: Send + Sync {
    fn forecast_savings(&self, owner_id: i64, goal_id: i64) -> Result<SavingsForecast>;
}

pub struct ForecastService {
    goal_service: Arc<dyn GoalServiceTrait>,
    analytics_service: Arc<dyn AnalyticsServiceTrait>,
}

impl ForecastService {
    pub fn new(
        goal_service: Arc<dyn GoalServiceTrait>,
        analytics_service: Arc<dyn AnalyticsServiceTrait>,
    ) -> Self {
        ForecastService {
            goal_service,
            analytics_service,
        }
    }
}

/// Mean of (income - expense) over the months that have activity; zero with no activity.
pub fn average_monthly_savings(trends: &[MonthlyTrend]) -> Result<Decimal> {
    if trends.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let total = checked_sum(trends.iter().map(MonthlyTrend::net_savings))?;
    checked_div(total, Decimal::from(trends.len()))
}

impl ForecastServiceTrait for ForecastService {
    fn forecast_savings(&self, owner_id: i64, goal_id: i64) -> Result<SavingsForecast> {
        let goal = self.goal_service.get_goal(owner_id, goal_id)?;
        let trends = self.analytics_service.income_expense_trends(owner_id)?;
        let average = average_monthly_savings(&trends)?;

        if average <= Decimal::ZERO {
            return Err(Error::UnreachableGoal(format!(
                "average monthly savings of {average} cannot reach goal {goal_id}"
            )));
        }

        let remaining = goal.remaining_amount();
        // A tiny positive average can push the quotient past the Decimal range.
        let months_to_goal = remaining.checked_div(average).ok_or_else(|| {
            Error::UnreachableGoal(format!(
                "average monthly savings of {average} are too small to reach goal {goal_id}"
            ))
        })?;
        debug!(
            "Forecast for goal {}: remaining {}, average savings {}, months {}",
            goal_id, remaining, average, months_to_goal
        );

        Ok(SavingsForecast {
            goal_id,
            remaining_amount: remaining,
            average_monthly_savings: average,
            months_to_goal,
        })
    }
}
