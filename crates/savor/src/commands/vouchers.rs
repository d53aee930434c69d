//! Voucher command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use savor_core::{
    ClassifiedVoucher, Command as CoreCommand, Console, EntityId, VoucherForm, VoucherStatus,
    rules,
};

use crate::cli::{GlobalOpts, VoucherFormArgs, VouchersArgs, VouchersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct VoucherRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Type")]
    discount_type: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Valid")]
    valid: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn to_row(cv: &ClassifiedVoucher, color: bool) -> VoucherRow {
    let v = &cv.voucher;
    VoucherRow {
        id: v.id.to_string(),
        code: v.code.clone(),
        discount_type: v.discount_type.to_string(),
        value: util::amount(v.discount_value),
        valid: format!("{} → {}", v.start_date, v.end_date),
        used: match v.usage_limit {
            Some(limit) => format!("{}/{limit}", v.used_count),
            None => format!("{}/∞", v.used_count),
        },
        status: status_label(cv.status, color),
    }
}

fn status_label(status: VoucherStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match status {
        VoucherStatus::Active => status.to_string().green().to_string(),
        VoucherStatus::Upcoming => status.to_string().cyan().to_string(),
        VoucherStatus::Expired => status.to_string().red().to_string(),
        VoucherStatus::UsageExhausted => status.to_string().yellow().to_string(),
    }
}

fn detail(cv: &ClassifiedVoucher) -> String {
    let v = &cv.voucher;
    [
        format!("ID:           {}", v.id),
        format!("Code:         {}", v.code),
        format!("Description:  {}", v.description),
        format!("Type:         {}", v.discount_type),
        format!("Value:        {}", util::amount(v.discount_value)),
        format!("Min order:    {}", util::amount(v.min_order_amount)),
        format!(
            "Max discount: {}",
            v.max_discount_amount.map_or_else(|| "-".into(), util::amount)
        ),
        format!("Valid:        {} → {}", v.start_date, v.end_date),
        format!(
            "Usage:        {}/{}",
            v.used_count,
            v.usage_limit
                .map_or_else(|| "unlimited".into(), |l: u32| l.to_string())
        ),
        format!("Status:       {}", cv.status),
    ]
    .join("\n")
}

/// Build the rules-engine form from CLI flags.
fn to_form(args: VoucherFormArgs) -> VoucherForm {
    VoucherForm {
        code: args.code,
        description: args.description,
        discount_type: args.discount_type,
        discount_value: args.value,
        min_order_amount: args.min_order,
        max_discount_amount: args.max_discount,
        start_date: args.start,
        end_date: args.end,
        usage_limit: args.usage_limit,
    }
}

/// Validate a form, mapping rule violations to usage errors.
fn validate(form: &VoucherForm) -> Result<savor_core::ValidatedVoucher, CliError> {
    rules::validate(form).map_err(|e| CliError::Validation {
        field: "voucher".into(),
        reason: e.to_string(),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: VouchersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VouchersCommand::List { status } => {
            let filter = status
                .as_deref()
                .map(|s| {
                    s.parse::<VoucherStatus>().map_err(|_| CliError::Validation {
                        field: "status".into(),
                        reason: format!(
                            "unknown status '{s}' (expected active, upcoming, expired, \
                             or usage_exhausted)"
                        ),
                    })
                })
                .transpose()?;

            let vouchers: Vec<ClassifiedVoucher> = console
                .vouchers()
                .await?
                .into_iter()
                .filter(|cv| filter.is_none_or(|f| cv.status == f))
                .collect();

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &vouchers,
                |cv| to_row(cv, color),
                |cv| cv.voucher.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VouchersCommand::Get { id } => {
            let vouchers = console.vouchers().await?;
            let found = vouchers.iter().find(|cv| cv.voucher.id.as_str() == id);
            match found {
                Some(cv) => {
                    let out = output::render_single(&global.output, cv, detail, |cv| {
                        cv.voucher.id.to_string()
                    });
                    output::print_output(&out, global.quiet);
                    Ok(())
                }
                None => Err(CliError::NotFound {
                    resource_type: "voucher".into(),
                    identifier: id,
                    list_command: "vouchers list".into(),
                }),
            }
        }

        VouchersCommand::Create(form_args) => {
            let validated = validate(&to_form(form_args))?;
            let code = validated.code.clone();
            console
                .execute(CoreCommand::CreateVoucher(validated))
                .await?;
            if !global.quiet {
                eprintln!("Voucher '{code}' created");
            }
            Ok(())
        }

        VouchersCommand::Update { id, form } => {
            let validated = validate(&to_form(form))?;
            console
                .execute(CoreCommand::UpdateVoucher {
                    id: EntityId::from(id),
                    update: validated,
                })
                .await?;
            if !global.quiet {
                eprintln!("Voucher updated");
            }
            Ok(())
        }

        VouchersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete voucher {id}?"), global.yes)? {
                return Ok(());
            }
            console
                .execute(CoreCommand::DeleteVoucher {
                    id: EntityId::from(id),
                })
                .await?;
            if !global.quiet {
                eprintln!("Voucher deleted");
            }
            Ok(())
        }
    }
}
