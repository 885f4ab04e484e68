//! Admin dashboard over mock data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exercises the design system end to end: stat cards and the orders table
//! follow density/radius tokens, and the revenue chart follows the resolved
//! theme through chart color tokens.

use design_system::chart::{ChartColor, ChartConfig, ChartSeries};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::chart::{ChartBars, ChartContainer, ChartLegend};
use crate::pages::dashboard_data::{OrderStatus, format_currency, monthly_revenue, recent_orders, summarize};

fn revenue_chart_config() -> ChartConfig {
    ChartConfig::new()
        .with_series(
            "desktop",
            ChartSeries {
                label: "Desktop".to_owned(),
                color: Some(ChartColor::Themed { light: "#2563eb".to_owned(), dark: "#60a5fa".to_owned() }),
            },
        )
        .with_series(
            "mobile",
            ChartSeries {
                label: "Mobile".to_owned(),
                color: Some(ChartColor::Themed { light: "#0d9488".to_owned(), dark: "#5eead4".to_owned() }),
            },
        )
}

fn status_tone(status: OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::Paid => BadgeTone::Success,
        OrderStatus::Pending => BadgeTone::Warning,
        OrderStatus::Refunded => BadgeTone::Danger,
    }
}

#[component]
fn StatCard(#[prop(into)] title: String, #[prop(into)] value: String, #[prop(into)] hint: String) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__hint">{hint}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let orders = recent_orders();
    let summary = summarize(&orders);
    let revenue = monthly_revenue();
    let config = revenue_chart_config();

    let labels: Vec<String> = revenue.iter().map(|m| m.month.to_owned()).collect();
    let desktop: Vec<f64> = revenue.iter().map(|m| m.desktop).collect();
    let mobile: Vec<f64> = revenue.iter().map(|m| m.mobile).collect();

    let rows = orders
        .into_iter()
        .map(|order| {
            view! {
                <tr>
                    <td>{order.id}</td>
                    <td>
                        <div class="orders__customer">{order.customer}</div>
                        <div class="orders__email">{order.email}</div>
                    </td>
                    <td><Badge tone=status_tone(order.status) label=order.status.as_str()/></td>
                    <td class="orders__amount">{format_currency(order.amount_cents)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <h1 class="page-title">"Dashboard"</h1>
            <section class="dashboard__stats">
                <StatCard title="Revenue" value=format_currency(summary.revenue_cents) hint="Paid orders"/>
                <StatCard title="Orders" value=summary.orders.to_string() hint=format!("{} pending", summary.pending)/>
                <StatCard title="Average order" value=format_currency(summary.average_paid_cents) hint="Across paid orders"/>
                <StatCard title="Refunds" value=summary.refunded.to_string() hint="This period"/>
            </section>

            <section class="card dashboard__chart">
                <h2 class="card__title">"Revenue by channel"</h2>
                <ChartContainer id="revenue" config=config.clone()>
                    <div class="chart-bars-group">
                        <ChartBars series_key="desktop" labels=labels.clone() values=desktop/>
                        <ChartBars series_key="mobile" labels=labels values=mobile/>
                    </div>
                    <ChartLegend config=config/>
                </ChartContainer>
            </section>

            <section class="card dashboard__orders">
                <h2 class="card__title">"Recent orders"</h2>
                <table class="orders">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Status"</th>
                            <th>"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
        </div>
    }
}
