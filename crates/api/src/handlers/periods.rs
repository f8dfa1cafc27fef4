//! Lists the supported progress periods so clients can build a selector.

use axum::Json;
use fitvision_core::period::Period;
use serde::Serialize;

use crate::response::Success;

#[derive(Debug, Serialize)]
pub struct PeriodInfo {
    pub id: Period,
    pub months: u32,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PeriodList {
    pub periods: Vec<PeriodInfo>,
    pub default: Period,
}

/// GET /api/v1/periods
pub async fn list_periods() -> Json<Success<PeriodList>> {
    let periods = Period::ALL
        .into_iter()
        .map(|period| PeriodInfo {
            id: period,
            months: period.months(),
            label: period.label(),
        })
        .collect();

    Json(Success::new(PeriodList {
        periods,
        default: Period::DEFAULT,
    }))
}
