// ── Voucher rules engine ──
//
// Pure, synchronous validation and status derivation for vouchers. The
// form handlers call `validate` before any create/update request goes out;
// list rendering calls `classify` and `sort_for_display` after a fetch.
// Nothing in here performs I/O or reads the clock -- callers pass `today`.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{DiscountType, Voucher, VoucherStatus};

/// Raw form fields as typed by the operator. Everything is a string at
/// this boundary; `validate` does the coercion.
#[derive(Debug, Clone, Default)]
pub struct VoucherForm {
    pub code: String,
    pub description: String,
    pub discount_type: String,
    pub discount_value: String,
    pub min_order_amount: String,
    pub max_discount_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub usage_limit: String,
}

/// A voucher configuration that passed every business rule, with all
/// fields coerced to their transmission types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedVoucher {
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_amount: f64,
    pub max_discount_amount: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub usage_limit: Option<u32>,
}

/// Why a voucher form was rejected. Every variant is locally recoverable:
/// the caller surfaces the message and the operator corrects the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    MissingRequiredField(&'static str),

    #[error("discount type must be 'percentage' or 'fixed'")]
    InvalidDiscountType,

    #[error("discount value must be a positive number (at most 100 for percentage vouchers)")]
    InvalidDiscountValue,

    #[error("minimum order amount must be a non-negative number")]
    InvalidMinOrderAmount,

    #[error("maximum discount amount must be a non-negative number")]
    InvalidMaxDiscountAmount,

    #[error(
        "discount cap ({cap}) is below the discount realized at the minimum order ({realized})"
    )]
    CapBelowRealizedDiscount { cap: String, realized: String },

    #[error("minimum order amount must be at least the fixed discount value")]
    MinOrderBelowFixedDiscount,

    #[error("usage limit must be a whole number of at least 1")]
    InvalidUsageLimit,

    #[error("dates must use the YYYY-MM-DD format")]
    InvalidDateFormat,

    #[error("end date must not be before start date")]
    EndBeforeStart,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a voucher form, fail-fast: the first violated rule wins.
///
/// Rule order is part of the contract -- the operator always sees the
/// earliest problem in the canonical sequence, and cross-field checks run
/// only after the fields they depend on have individually passed.
pub fn validate(form: &VoucherForm) -> Result<ValidatedVoucher, ValidationError> {
    // 1. Required fields.
    let code = required(&form.code, "code")?;
    let description = required(&form.description, "description")?;
    let discount_type_raw = required(&form.discount_type, "discount_type")?;
    let discount_value_raw = required(&form.discount_value, "discount_value")?;
    let start_raw = required(&form.start_date, "start_date")?;
    let end_raw = required(&form.end_date, "end_date")?;

    // 2. Discount type.
    let discount_type = match discount_type_raw {
        "percentage" => DiscountType::Percentage,
        "fixed" => DiscountType::Fixed,
        _ => return Err(ValidationError::InvalidDiscountType),
    };

    // 3. Discount value.
    let discount_value =
        parse_amount(discount_value_raw).ok_or(ValidationError::InvalidDiscountValue)?;
    let value_ok = match discount_type {
        DiscountType::Percentage => discount_value > 0.0 && discount_value <= 100.0,
        DiscountType::Fixed => discount_value > 0.0,
    };
    if !value_ok {
        return Err(ValidationError::InvalidDiscountValue);
    }

    // 4. Minimum order amount (optional, defaults to 0).
    let min_order_given = !form.min_order_amount.trim().is_empty();
    let min_order_amount = if min_order_given {
        let v = parse_amount(&form.min_order_amount)
            .ok_or(ValidationError::InvalidMinOrderAmount)?;
        if v < 0.0 {
            return Err(ValidationError::InvalidMinOrderAmount);
        }
        v
    } else {
        0.0
    };

    // 5. Maximum discount amount (optional).
    let max_discount_amount = if form.max_discount_amount.trim().is_empty() {
        None
    } else {
        let v = parse_amount(&form.max_discount_amount)
            .ok_or(ValidationError::InvalidMaxDiscountAmount)?;
        if v < 0.0 {
            return Err(ValidationError::InvalidMaxDiscountAmount);
        }
        Some(v)
    };

    // 6. Percentage cross-rule: the cap must cover the discount realized
    //    at the minimum qualifying order.
    if discount_type == DiscountType::Percentage {
        if let Some(cap) = max_discount_amount {
            let realized = min_order_amount * discount_value / 100.0;
            if cap < realized {
                return Err(ValidationError::CapBelowRealizedDiscount {
                    cap: trim_number(cap),
                    realized: trim_number(realized),
                });
            }
        }
    }

    // 7. Fixed cross-rule: an order at the minimum must not net below zero.
    if discount_type == DiscountType::Fixed
        && min_order_given
        && min_order_amount < discount_value
    {
        return Err(ValidationError::MinOrderBelowFixedDiscount);
    }

    // 8. Usage limit (optional).
    let usage_limit = if form.usage_limit.trim().is_empty() {
        None
    } else {
        let n: u32 = form
            .usage_limit
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidUsageLimit)?;
        if n < 1 {
            return Err(ValidationError::InvalidUsageLimit);
        }
        Some(n)
    };

    // 9. Dates.
    let start_date = NaiveDate::parse_from_str(start_raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat)?;
    let end_date = NaiveDate::parse_from_str(end_raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat)?;

    // 10. Date ordering.
    if end_date < start_date {
        return Err(ValidationError::EndBeforeStart);
    }

    Ok(ValidatedVoucher {
        code: code.to_owned(),
        description: description.to_owned(),
        discount_type,
        discount_value,
        min_order_amount,
        max_discount_amount,
        start_date,
        end_date,
        usage_limit,
    })
}

/// Derive a voucher's status for `today`. First match wins:
/// upcoming, then expired, then usage-exhausted, then active.
///
/// A voucher past its end date AND out of redemptions reports `Expired` --
/// the ordering is a deliberate, preserved contract.
pub fn classify(voucher: &Voucher, today: NaiveDate) -> VoucherStatus {
    if today < voucher.start_date {
        return VoucherStatus::Upcoming;
    }
    if today > voucher.end_date {
        return VoucherStatus::Expired;
    }
    if let Some(limit) = voucher.usage_limit {
        if voucher.used_count >= limit {
            return VoucherStatus::UsageExhausted;
        }
    }
    VoucherStatus::Active
}

/// Order vouchers for display: everything still redeemable-by-date first,
/// expired vouchers last. Stable -- relative input order is preserved
/// within each half.
pub fn sort_for_display(mut vouchers: Vec<Voucher>, today: NaiveDate) -> Vec<Voucher> {
    vouchers.sort_by_key(|v| v.end_date < today);
    vouchers
}

// ── Helpers ─────────────────────────────────────────────────────────

fn required<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingRequiredField(field))
    } else {
        Ok(trimmed)
    }
}

/// Parse a currency/percentage amount. Rejects non-numeric input and NaN.
fn parse_amount(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    if parsed.is_nan() { None } else { Some(parsed) }
}

/// Render an amount without a trailing `.0` for whole values.
fn trim_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::EntityId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn percentage_form() -> VoucherForm {
        VoucherForm {
            code: "SUMMER20".into(),
            description: "20% off".into(),
            discount_type: "percentage".into(),
            discount_value: "20".into(),
            min_order_amount: "100000".into(),
            max_discount_amount: "25000".into(),
            start_date: "2025-01-01".into(),
            end_date: "2025-01-31".into(),
            usage_limit: "100".into(),
        }
    }

    fn fixed_form() -> VoucherForm {
        VoucherForm {
            code: "FLAT5K".into(),
            description: "5000 off".into(),
            discount_type: "fixed".into(),
            discount_value: "5000".into(),
            min_order_amount: "30000".into(),
            max_discount_amount: String::new(),
            start_date: "2025-01-01".into(),
            end_date: "2025-06-30".into(),
            usage_limit: String::new(),
        }
    }

    fn voucher(start: &str, end: &str, limit: Option<u32>, used: u32) -> Voucher {
        Voucher {
            id: EntityId::from("v1"),
            code: "CODE".into(),
            description: "desc".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            min_order_amount: 0.0,
            max_discount_amount: None,
            start_date: date(start),
            end_date: date(end),
            usage_limit: limit,
            used_count: used,
        }
    }

    // ── validate: required fields ───────────────────────────────────

    #[test]
    fn accepts_complete_percentage_form() {
        let v = validate(&percentage_form()).unwrap();
        assert_eq!(v.discount_type, DiscountType::Percentage);
        assert_eq!(v.discount_value, 20.0);
        assert_eq!(v.min_order_amount, 100_000.0);
        assert_eq!(v.max_discount_amount, Some(25_000.0));
        assert_eq!(v.usage_limit, Some(100));
        assert_eq!(v.start_date, date("2025-01-01"));
    }

    #[test]
    fn rejects_empty_code_first() {
        let mut form = percentage_form();
        form.code = "   ".into();
        // Break a later rule too -- the missing field must still win.
        form.discount_value = "250".into();
        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingRequiredField("code"))
        );
    }

    #[test]
    fn rejects_empty_description() {
        let mut form = fixed_form();
        form.description = String::new();
        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingRequiredField("description"))
        );
    }

    #[test]
    fn rejects_empty_dates() {
        let mut form = fixed_form();
        form.end_date = String::new();
        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingRequiredField("end_date"))
        );
    }

    // ── validate: discount type and value ───────────────────────────

    #[test]
    fn rejects_unknown_discount_type() {
        let mut form = percentage_form();
        form.discount_type = "bogo".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDiscountType));
    }

    #[test]
    fn percentage_bounds_are_exclusive_zero_inclusive_hundred() {
        let mut form = percentage_form();
        form.max_discount_amount = String::new();
        form.min_order_amount = String::new();

        form.discount_value = "0".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDiscountValue));

        form.discount_value = "100.0001".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDiscountValue));

        form.discount_value = "100".into();
        assert!(validate(&form).is_ok());

        form.discount_value = "0.01".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn rejects_nan_discount_value() {
        let mut form = fixed_form();
        form.discount_value = "NaN".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDiscountValue));
    }

    #[test]
    fn rejects_non_numeric_discount_value() {
        let mut form = fixed_form();
        form.discount_value = "ten".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDiscountValue));
    }

    #[test]
    fn rejects_negative_fixed_value() {
        let mut form = fixed_form();
        form.discount_value = "-5".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDiscountValue));
    }

    // ── validate: optional amounts ──────────────────────────────────

    #[test]
    fn rejects_negative_min_order() {
        let mut form = percentage_form();
        form.min_order_amount = "-1".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidMinOrderAmount));
    }

    #[test]
    fn empty_min_order_defaults_to_zero() {
        let mut form = percentage_form();
        form.min_order_amount = String::new();
        let v = validate(&form).unwrap();
        assert_eq!(v.min_order_amount, 0.0);
    }

    #[test]
    fn rejects_garbage_max_discount() {
        let mut form = percentage_form();
        form.max_discount_amount = "lots".into();
        assert_eq!(
            validate(&form),
            Err(ValidationError::InvalidMaxDiscountAmount)
        );
    }

    // ── validate: cross-field rules ─────────────────────────────────

    #[test]
    fn rejects_cap_below_realized_discount() {
        // 20% of 100000 = 20000 > cap 15000.
        let mut form = percentage_form();
        form.max_discount_amount = "15000".into();
        assert_eq!(
            validate(&form),
            Err(ValidationError::CapBelowRealizedDiscount {
                cap: "15000".into(),
                realized: "20000".into(),
            })
        );
    }

    #[test]
    fn accepts_cap_covering_realized_discount() {
        // 20% of 100000 = 20000 <= cap 25000.
        assert!(validate(&percentage_form()).is_ok());
    }

    #[test]
    fn cap_rule_skipped_when_cap_absent() {
        let mut form = percentage_form();
        form.max_discount_amount = String::new();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn rejects_min_order_below_fixed_discount() {
        let mut form = fixed_form();
        form.discount_value = "50000".into();
        form.min_order_amount = "30000".into();
        assert_eq!(
            validate(&form),
            Err(ValidationError::MinOrderBelowFixedDiscount)
        );
    }

    #[test]
    fn fixed_rule_skipped_when_min_order_absent() {
        let mut form = fixed_form();
        form.discount_value = "50000".into();
        form.min_order_amount = String::new();
        assert!(validate(&form).is_ok());
    }

    // ── validate: usage limit and dates ─────────────────────────────

    #[test]
    fn rejects_zero_or_fractional_usage_limit() {
        let mut form = fixed_form();
        form.usage_limit = "0".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidUsageLimit));

        form.usage_limit = "2.5".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidUsageLimit));
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut form = fixed_form();
        form.start_date = "01/01/2025".into();
        assert_eq!(validate(&form), Err(ValidationError::InvalidDateFormat));
    }

    #[test]
    fn rejects_end_before_start() {
        let mut form = fixed_form();
        form.start_date = "2025-06-30".into();
        form.end_date = "2025-01-01".into();
        assert_eq!(validate(&form), Err(ValidationError::EndBeforeStart));
    }

    #[test]
    fn accepts_single_day_window() {
        let mut form = fixed_form();
        form.start_date = "2025-03-15".into();
        form.end_date = "2025-03-15".into();
        assert!(validate(&form).is_ok());
    }

    // ── classify ────────────────────────────────────────────────────

    #[test]
    fn classifies_upcoming() {
        let v = voucher("2025-06-01", "2025-06-30", None, 0);
        assert_eq!(classify(&v, date("2025-05-31")), VoucherStatus::Upcoming);
    }

    #[test]
    fn classifies_expired() {
        let v = voucher("2025-06-01", "2025-06-30", None, 0);
        assert_eq!(classify(&v, date("2025-07-01")), VoucherStatus::Expired);
    }

    #[test]
    fn classifies_usage_exhausted() {
        let v = voucher("2025-06-01", "2025-06-30", Some(10), 10);
        assert_eq!(
            classify(&v, date("2025-06-15")),
            VoucherStatus::UsageExhausted
        );
    }

    #[test]
    fn classifies_active() {
        let v = voucher("2025-06-01", "2025-06-30", Some(10), 9);
        assert_eq!(classify(&v, date("2025-06-15")), VoucherStatus::Active);
    }

    #[test]
    fn boundary_days_are_inside_the_window() {
        let v = voucher("2025-06-01", "2025-06-30", None, 0);
        assert_eq!(classify(&v, date("2025-06-01")), VoucherStatus::Active);
        assert_eq!(classify(&v, date("2025-06-30")), VoucherStatus::Active);
    }

    #[test]
    fn expired_takes_precedence_over_usage_exhausted() {
        // Past end date AND out of redemptions: expired wins, whatever
        // the usage counters say.
        let v = voucher("2025-06-01", "2025-06-30", Some(5), 5);
        assert_eq!(classify(&v, date("2025-07-01")), VoucherStatus::Expired);

        let v = voucher("2025-06-01", "2025-06-30", Some(5), 99);
        assert_eq!(classify(&v, date("2025-07-01")), VoucherStatus::Expired);
    }

    #[test]
    fn classify_is_stable_within_a_regime() {
        let v = voucher("2025-06-01", "2025-06-30", Some(10), 3);
        // Any two days inside the window agree.
        assert_eq!(
            classify(&v, date("2025-06-02")),
            classify(&v, date("2025-06-29"))
        );
        // Any two days past the window agree.
        assert_eq!(
            classify(&v, date("2025-07-01")),
            classify(&v, date("2026-01-01"))
        );
    }

    // ── sort_for_display ────────────────────────────────────────────

    #[test]
    fn expired_vouchers_sort_last() {
        let today = date("2025-06-15");
        let input = vec![
            voucher("2025-01-01", "2025-01-31", None, 0), // expired
            voucher("2025-06-01", "2025-06-30", None, 0), // live
            voucher("2025-02-01", "2025-02-28", None, 0), // expired
            voucher("2025-07-01", "2025-07-31", None, 0), // upcoming (not expired)
        ];
        let sorted = sort_for_display(input, today);
        let ends: Vec<_> = sorted.iter().map(|v| v.end_date).collect();
        assert_eq!(
            ends,
            vec![
                date("2025-06-30"),
                date("2025-07-31"),
                date("2025-01-31"),
                date("2025-02-28"),
            ]
        );
    }

    #[test]
    fn sort_is_stable_within_partitions() {
        let today = date("2025-06-15");
        let mut a = voucher("2025-01-01", "2025-01-31", None, 0);
        a.code = "EXP-A".into();
        let mut b = voucher("2025-01-01", "2025-01-31", None, 0);
        b.code = "EXP-B".into();
        let mut c = voucher("2025-06-01", "2025-06-30", None, 0);
        c.code = "LIVE-C".into();
        let mut d = voucher("2025-06-01", "2025-06-30", None, 0);
        d.code = "LIVE-D".into();

        let sorted = sort_for_display(vec![a, c, b, d], today);
        let codes: Vec<_> = sorted.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["LIVE-C", "LIVE-D", "EXP-A", "EXP-B"]);
    }

    #[test]
    fn voucher_ending_today_is_not_expired_for_sorting() {
        let today = date("2025-06-15");
        let input = vec![
            voucher("2025-01-01", "2025-01-31", None, 0),
            voucher("2025-06-01", "2025-06-15", None, 0),
        ];
        let sorted = sort_for_display(input, today);
        assert_eq!(sorted[0].end_date, date("2025-06-15"));
    }
}
