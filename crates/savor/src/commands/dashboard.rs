//! Dashboard command handler.

use savor_core::Console;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = console.dashboard().await?;

    let out = output::render_single(
        &global.output,
        &stats,
        |s| {
            [
                format!("Total orders:   {}", s.total_orders),
                format!("Pending orders: {}", s.pending_orders),
                format!("Menu items:     {}", s.total_foods),
                format!("Total revenue:  {}", util::amount(s.total_revenue)),
                format!(
                    "Avg rating:     {:.1} ({} reviews)",
                    s.average_rating, s.review_count
                ),
            ]
            .join("\n")
        },
        |s| s.total_orders.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
