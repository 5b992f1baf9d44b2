//! HTML fragments shared by the dashboard pages.

/// Fixed message shown when a dataset cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Não foi possível carregar os dados.";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn section_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="section-header"><h1>{}</h1><p>{}</p></div>"#,
        escape(title),
        escape(subtitle)
    )
}

pub fn loading(title: &str) -> String {
    format!(
        r#"<section class="section-loading fade-in">{}<div class="loading-state"><div class="spinner"></div><p>Carregando dados...</p></div></section>"#,
        section_header(title, "")
    )
}

pub fn error_panel(title: &str, detail: &str) -> String {
    format!(
        r#"<section class="section-error fade-in">{}<div class="error-panel"><p class="error-message">{}</p><p class="error-detail">{}</p></div></section>"#,
        section_header(title, ""),
        LOAD_ERROR_MESSAGE,
        escape(detail)
    )
}

/// Direction of a metric change, rendered as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
            Trend::Neutral => "neutral",
        }
    }

    /// Up is good unless `lower_is_better`.
    pub fn of_change(change: f64, lower_is_better: bool) -> Self {
        if change == 0.0 {
            Trend::Neutral
        } else if (change > 0.0) != lower_is_better {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }
}

pub fn metric_card(label: &str, value: &str, change: &str, trend: Trend) -> String {
    format!(
        r#"<div class="metric-card"><div class="metric-label">{}</div><div class="metric-value">{}</div><div class="metric-change {}">{}</div></div>"#,
        escape(label),
        escape(value),
        trend.css_class(),
        escape(change)
    )
}

/// Card holding one `<canvas>`; `extra_class` sizes it in the grid.
pub fn chart_card(canvas_id: &str, title: &str, extra_class: &str) -> String {
    let class = if extra_class.is_empty() {
        "chart-card".to_string()
    } else {
        format!("chart-card {}", extra_class)
    };
    format!(
        r#"<div class="{}"><div class="chart-card-header"><h3 class="chart-card-title">{}</h3></div><div class="chart-container"><canvas id="{}"></canvas></div></div>"#,
        class,
        escape(title),
        canvas_id
    )
}

pub fn stat_item(label: &str, value: &str) -> String {
    format!(
        r#"<div class="stat-item"><div class="stat-label">{}</div><div class="stat-value">{}</div></div>"#,
        escape(label),
        escape(value)
    )
}
