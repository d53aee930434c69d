//! Order command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use savor_core::{Command as CoreCommand, Console, EntityId, Order, OrderStatus};

use crate::cli::{GlobalOpts, OrdersArgs, OrdersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Items")]
    items: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Placed")]
    placed: String,
}

fn to_row(o: &Order, color: bool) -> OrderRow {
    OrderRow {
        id: o.id.to_string(),
        customer: util::dash(o.customer_name.as_deref()),
        items: o.items.len().to_string(),
        total: util::amount(o.total_amount),
        status: status_label(o.status, color),
        placed: o
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into()),
    }
}

fn status_label(status: OrderStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match status {
        OrderStatus::Pending => status.to_string().yellow().to_string(),
        OrderStatus::Confirmed | OrderStatus::Preparing | OrderStatus::Delivering => {
            status.to_string().cyan().to_string()
        }
        OrderStatus::Delivered => status.to_string().green().to_string(),
        OrderStatus::Cancelled => status.to_string().red().to_string(),
    }
}

fn detail(o: &Order) -> String {
    let mut lines = vec![
        format!("ID:       {}", o.id),
        format!("Customer: {}", util::dash(o.customer_name.as_deref())),
        format!("Phone:    {}", util::dash(o.customer_phone.as_deref())),
        format!("Address:  {}", util::dash(o.delivery_address.as_deref())),
        format!("Status:   {}", o.status),
        format!(
            "Placed:   {}",
            o.created_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".into())
        ),
        String::new(),
        "Items:".into(),
    ];
    for item in &o.items {
        lines.push(format!(
            "  {} x{} @ {}",
            item.name,
            item.quantity,
            util::amount(item.price)
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total:    {}", util::amount(o.total_amount)));
    lines.join("\n")
}

fn parse_status(s: &str) -> Result<OrderStatus, CliError> {
    s.parse().map_err(|_| CliError::Validation {
        field: "status".into(),
        reason: format!(
            "unknown status '{s}' (expected pending, confirmed, preparing, \
             delivering, delivered, or cancelled)"
        ),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: OrdersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OrdersCommand::List { status } => {
            let filter = status.as_deref().map(parse_status).transpose()?;
            let orders = console.orders(filter).await?;

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &orders,
                |o| to_row(o, color),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::Get { id } => {
            let orders = console.orders(None).await?;
            let found = orders.iter().find(|o| o.id.as_str() == id);
            match found {
                Some(o) => {
                    let out =
                        output::render_single(&global.output, o, detail, |o| o.id.to_string());
                    output::print_output(&out, global.quiet);
                    Ok(())
                }
                None => Err(CliError::NotFound {
                    resource_type: "order".into(),
                    identifier: id,
                    list_command: "orders list".into(),
                }),
            }
        }

        OrdersCommand::SetStatus { id, status } => {
            let status = parse_status(&status)?;
            if status == OrderStatus::Cancelled
                && !util::confirm(&format!("Cancel order {id}?"), global.yes)?
            {
                return Ok(());
            }
            console
                .execute(CoreCommand::UpdateOrderStatus {
                    id: EntityId::from(id),
                    status,
                })
                .await?;
            if !global.quiet {
                eprintln!("Order status set to {status}");
            }
            Ok(())
        }
    }
}
