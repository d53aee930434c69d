//! Revenue report command handler.

use tabled::Tabled;

use savor_core::{Console, RevenuePeriod, RevenuePoint};

use crate::cli::{GlobalOpts, RevenueArgs};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RevenueRow {
    #[tabled(rename = "Period")]
    label: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Orders")]
    orders: String,
}

impl From<&RevenuePoint> for RevenueRow {
    fn from(p: &RevenuePoint) -> Self {
        Self {
            label: p.label.clone(),
            revenue: util::amount(p.revenue),
            orders: p.order_count.to_string(),
        }
    }
}

pub async fn handle(
    console: &Console,
    args: RevenueArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let period: RevenuePeriod = args.period.parse().map_err(|_| CliError::Validation {
        field: "period".into(),
        reason: format!(
            "unknown period '{}' (expected daily, weekly, monthly, or yearly)",
            args.period
        ),
    })?;

    let points = console.revenue(period).await?;
    let out = output::render_list(
        &global.output,
        &points,
        |p| RevenueRow::from(p),
        |p| p.label.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
