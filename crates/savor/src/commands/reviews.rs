//! Review command handlers (read-only).

use tabled::Tabled;

use savor_core::{Console, Review};

use crate::cli::{GlobalOpts, ReviewsArgs, ReviewsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ReviewRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Comment")]
    comment: String,
    #[tabled(rename = "Date")]
    date: String,
}

impl From<&Review> for ReviewRow {
    fn from(r: &Review) -> Self {
        Self {
            id: r.id.to_string(),
            customer: util::dash(r.customer_name.as_deref()),
            rating: format!("{:.1}", r.rating),
            comment: r
                .comment
                .as_deref()
                .map(truncate)
                .unwrap_or_else(|| "-".into()),
            date: r
                .created_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".into()),
        }
    }
}

/// Keep table rows readable; full text is available via --output json.
fn truncate(s: &str) -> String {
    const MAX: usize = 60;
    if s.chars().count() <= MAX {
        s.to_string()
    } else {
        let cut: String = s.chars().take(MAX - 1).collect();
        format!("{cut}…")
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: ReviewsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ReviewsCommand::List { max_rating } => {
            let reviews: Vec<Review> = console
                .reviews()
                .await?
                .into_iter()
                .filter(|r| max_rating.is_none_or(|max| r.rating <= max))
                .collect();

            let out = output::render_list(
                &global.output,
                &reviews,
                |r| ReviewRow::from(r),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
