/// Share of `total_users` still active, in percent. Zero total → 0.
pub fn calculate_retention_rate(active_users: f64, total_users: f64) -> f64 {
    ratio_percent(active_users, total_users)
}

/// Share of `total_customers` lost over the period, in percent. Zero total → 0.
pub fn calculate_churn_rate(customers_lost: f64, total_customers: f64) -> f64 {
    ratio_percent(customers_lost, total_customers)
}

/// Relative change from `previous` to `current`, in percent. Zero previous → 0.
pub fn calculate_growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Customer lifetime value: average order value × purchases per year × years.
pub fn calculate_ltv(avg_order_value: f64, purchases_per_year: f64, lifespan_years: f64) -> f64 {
    avg_order_value * purchases_per_year * lifespan_years
}

/// Heatmap color for a retention percentage.
pub fn retention_color(percentage: f64) -> &'static str {
    if percentage >= 70.0 {
        "#CCFF00"
    } else if percentage >= 50.0 {
        "#06FFA5"
    } else if percentage >= 30.0 {
        "#FFBA08"
    } else if percentage >= 15.0 {
        "#FF6B35"
    } else {
        "#FF006E"
    }
}

fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}
