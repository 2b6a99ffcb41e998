#[cfg(test)]
mod tests {
    use crate::analytics::{
        AnalyticsServiceTrait, CategorySpending, DayOfWeekAverage, MonthlyTrend,
    };
    use crate::errors::{Error, Result};
    use crate::forecast::{average_monthly_savings, ForecastService, ForecastServiceTrait};
    use crate::goals::{Goal, GoalServiceTrait, GoalUpdate, NewGoal};
    use crate::utils::MonthKey;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct MockGoalService {
        goal: Goal,
    }

    #[async_trait]
    impl GoalServiceTrait for MockGoalService {
        fn get_goals(&self, _owner_id: i64) -> Result<Vec<Goal>> {
            unimplemented!()
        }

        fn get_goal(&self, owner_id: i64, goal_id: i64) -> Result<Goal> {
            if owner_id == self.goal.user_id && goal_id == self.goal.id {
                Ok(self.goal.clone())
            } else {
                Err(Error::NotFound(format!("goal {goal_id}")))
            }
        }

        async fn create_goal(&self, _owner_id: i64, _new_goal: NewGoal) -> Result<Goal> {
            unimplemented!()
        }

        async fn update_goal(
            &self,
            _owner_id: i64,
            _goal_id: i64,
            _goal_update: GoalUpdate,
        ) -> Result<Goal> {
            unimplemented!()
        }

        async fn delete_goal(&self, _owner_id: i64, _goal_id: i64) -> Result<()> {
            unimplemented!()
        }
    }

    struct MockAnalytics {
        trends: Vec<MonthlyTrend>,
    }

    impl AnalyticsServiceTrait for MockAnalytics {
        fn spending_by_category(
            &self,
            _owner_id: i64,
            _month: MonthKey,
        ) -> Result<Vec<CategorySpending>> {
            unimplemented!()
        }

        fn income_expense_trends(&self, _owner_id: i64) -> Result<Vec<MonthlyTrend>> {
            Ok(self.trends.clone())
        }

        fn average_spending_by_day_of_week(&self, _owner_id: i64) -> Result<Vec<DayOfWeekAverage>> {
            unimplemented!()
        }
    }

    fn goal(target: Decimal, current: Decimal) -> Goal {
        Goal {
            id: 5,
            user_id: 1,
            name: "House".to_string(),
            target_amount: target,
            current_amount: current,
            deadline: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn trend(month: &str, income: Decimal, expense: Decimal) -> MonthlyTrend {
        MonthlyTrend {
            month: MonthKey::parse(month).unwrap(),
            income,
            expense,
        }
    }

    fn service(goal: Goal, trends: Vec<MonthlyTrend>) -> ForecastService {
        ForecastService::new(
            Arc::new(MockGoalService { goal }),
            Arc::new(MockAnalytics { trends }),
        )
    }

    #[test]
    fn forecast_divides_remaining_by_average_savings() {
        let svc = service(
            goal(dec!(1000), dec!(200)),
            vec![
                trend("2024-01", dec!(500), dec!(350)),
                trend("2024-02", dec!(600), dec!(350)),
            ],
        );

        let forecast = svc.forecast_savings(1, 5).unwrap();
        assert_eq!(forecast.average_monthly_savings, dec!(200));
        assert_eq!(forecast.remaining_amount, dec!(800));
        assert_eq!(forecast.months_to_goal, dec!(4));
    }

    #[test]
    fn forecast_is_not_rounded() {
        let svc = service(
            goal(dec!(1000), Decimal::ZERO),
            vec![trend("2024-01", dec!(300), Decimal::ZERO)],
        );
        let forecast = svc.forecast_savings(1, 5).unwrap();
        assert!(forecast.months_to_goal > dec!(3.33));
        assert!(forecast.months_to_goal < dec!(3.34));
    }

    #[test]
    fn no_activity_means_unreachable() {
        let svc = service(goal(dec!(1000), Decimal::ZERO), Vec::new());
        assert!(matches!(
            svc.forecast_savings(1, 5),
            Err(Error::UnreachableGoal(_))
        ));
    }

    #[test]
    fn negative_savings_mean_unreachable() {
        let svc = service(
            goal(dec!(1000), Decimal::ZERO),
            vec![
                trend("2024-01", dec!(100), dec!(300)),
                trend("2024-02", dec!(150), Decimal::ZERO),
            ],
        );
        assert!(matches!(
            svc.forecast_savings(1, 5),
            Err(Error::UnreachableGoal(_))
        ));
    }

    #[test]
    fn met_goal_yields_non_positive_months() {
        let svc = service(
            goal(dec!(1000), dec!(1200)),
            vec![trend("2024-01", dec!(100), Decimal::ZERO)],
        );
        let forecast = svc.forecast_savings(1, 5).unwrap();
        assert_eq!(forecast.months_to_goal, dec!(-2));
    }

    #[test]
    fn missing_goal_is_not_found() {
        let svc = service(
            goal(dec!(1000), Decimal::ZERO),
            vec![trend("2024-01", dec!(100), Decimal::ZERO)],
        );
        assert!(matches!(svc.forecast_savings(2, 5), Err(Error::NotFound(_))));
        assert!(matches!(svc.forecast_savings(1, 6), Err(Error::NotFound(_))));
    }

    #[test]
    fn average_of_no_months_is_zero() {
        assert_eq!(average_monthly_savings(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn tiny_savings_against_a_large_target_is_unreachable() {
        let svc = service(
            goal(dec!(1_000_000_000_000), Decimal::ZERO),
            vec![trend("2024-01", dec!(0.0000001), Decimal::ZERO)],
        );
        // 1e12 / 1e-7 still fits; push the remainder to the edge of the range.
        assert!(svc.forecast_savings(1, 5).is_ok());

        let svc = service(
            goal(Decimal::MAX, Decimal::ZERO),
            vec![trend("2024-01", dec!(0.0000001), Decimal::ZERO)],
        );
        assert!(matches!(
            svc.forecast_savings(1, 5),
            Err(Error::UnreachableGoal(_))
        ));
    }

    #[test]
    fn savings_beyond_the_decimal_range_are_an_error() {
        let half = Decimal::MAX / dec!(2);
        let trends = vec![
            trend("2024-01", half, Decimal::ZERO),
            trend("2024-02", half, Decimal::ZERO),
            trend("2024-03", half, Decimal::ZERO),
        ];
        assert!(matches!(
            average_monthly_savings(&trends),
            Err(Error::Unexpected(_))
        ));

        let svc = service(goal(dec!(1000), Decimal::ZERO), trends);
        assert!(matches!(
            svc.forecast_savings(1, 5),
            Err(Error::Unexpected(_))
        ));
    }
}
