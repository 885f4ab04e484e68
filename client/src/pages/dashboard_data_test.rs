use super::*;

// =============================================================
// summarize
// =============================================================

#[test]
fn summarize_counts_revenue_from_paid_orders_only() {
    let summary = summarize(&recent_orders());
    assert_eq!(summary.orders, 5);
    assert_eq!(summary.paid, 3);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.refunded, 1);
    assert_eq!(summary.revenue_cents, 199_900 + 29_900 + 3_900);
    assert_eq!(summary.average_paid_cents, (199_900 + 29_900 + 3_900) / 3);
}

#[test]
fn summarize_empty_orders_is_zeroed() {
    assert_eq!(summarize(&[]), DashboardSummary::default());
}

// =============================================================
// format_currency
// =============================================================

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(0), "$0.00");
    assert_eq!(format_currency(5), "$0.05");
    assert_eq!(format_currency(99_999), "$999.99");
    assert_eq!(format_currency(199_900), "$1,999.00");
    assert_eq!(format_currency(123_456_789), "$1,234,567.89");
}

#[test]
fn monthly_revenue_has_one_entry_per_month() {
    let months: Vec<&str> = monthly_revenue().iter().map(|m| m.month).collect();
    assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
}
