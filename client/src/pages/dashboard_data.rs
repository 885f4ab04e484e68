//! Mock data and pure aggregation for the admin dashboard.

#[cfg(test)]
#[path = "dashboard_data_test.rs"]
mod dashboard_data_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Paid,
    Pending,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Refunded => "refunded",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub email: &'static str,
    pub status: OrderStatus,
    pub amount_cents: u64,
}

/// Monthly revenue split by channel, in whole dollars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub desktop: f64,
    pub mobile: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Paid orders only; refunds and pending orders are excluded.
    pub revenue_cents: u64,
    pub orders: usize,
    pub paid: usize,
    pub pending: usize,
    pub refunded: usize,
    pub average_paid_cents: u64,
}

pub fn recent_orders() -> Vec<Order> {
    vec![
        Order { id: "ORD-1042", customer: "Olivia Martin", email: "olivia@example.com", status: OrderStatus::Paid, amount_cents: 199_900 },
        Order { id: "ORD-1041", customer: "Jackson Lee", email: "jackson@example.com", status: OrderStatus::Pending, amount_cents: 3_900 },
        Order { id: "ORD-1040", customer: "Isabella Nguyen", email: "isabella@example.com", status: OrderStatus::Paid, amount_cents: 29_900 },
        Order { id: "ORD-1039", customer: "William Kim", email: "will@example.com", status: OrderStatus::Refunded, amount_cents: 9_900 },
        Order { id: "ORD-1038", customer: "Sofia Davis", email: "sofia@example.com", status: OrderStatus::Paid, amount_cents: 3_900 },
    ]
}

pub fn monthly_revenue() -> Vec<MonthlyRevenue> {
    vec![
        MonthlyRevenue { month: "Jan", desktop: 186.0, mobile: 80.0 },
        MonthlyRevenue { month: "Feb", desktop: 305.0, mobile: 200.0 },
        MonthlyRevenue { month: "Mar", desktop: 237.0, mobile: 120.0 },
        MonthlyRevenue { month: "Apr", desktop: 73.0, mobile: 190.0 },
        MonthlyRevenue { month: "May", desktop: 209.0, mobile: 130.0 },
        MonthlyRevenue { month: "Jun", desktop: 214.0, mobile: 140.0 },
    ]
}

pub fn summarize(orders: &[Order]) -> DashboardSummary {
    let mut summary = DashboardSummary { orders: orders.len(), ..DashboardSummary::default() };
    for order in orders {
        match order.status {
            OrderStatus::Paid => {
                summary.paid += 1;
                summary.revenue_cents += order.amount_cents;
            }
            OrderStatus::Pending => summary.pending += 1,
            OrderStatus::Refunded => summary.refunded += 1,
        }
    }
    if summary.paid > 0 {
        summary.average_paid_cents = summary.revenue_cents / summary.paid as u64;
    }
    summary
}

/// `$1,234.56` style formatting for a cent amount.
pub fn format_currency(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{:02}", cents % 100)
}
