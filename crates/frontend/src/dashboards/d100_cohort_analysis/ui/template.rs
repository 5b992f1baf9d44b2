use crate::shared::markup::{chart_card, escape, section_header, stat_item};
use contracts::dashboards::d100_cohort_analysis::{max_offset, CohortDataset, CohortInsights, CohortRecord};
use contracts::enums::CohortPeriod;
use contracts::shared::analytics::retention_color;
use contracts::shared::format::{
    format_date_str, format_number_with_separator, format_percentage, DateFormat,
};

pub const TITLE: &str = "Análise de Cohort";
const SUBTITLE: &str = "Retenção de clientes por mês de aquisição";

pub const PERIOD_SELECT_ID: &str = "cohort-period";
pub const RESET_BUTTON_ID: &str = "cohort-reset";

pub const RETENTION_CURVE_CANVAS: &str = "cohort-retention-chart";
pub const SIZE_CANVAS: &str = "cohort-size-chart";
pub const REVENUE_CANVAS: &str = "cohort-revenue-chart";

pub fn page(dataset: &CohortDataset, cohorts: &[CohortRecord], period: CohortPeriod) -> String {
    let updated = dataset
        .updated_at
        .as_deref()
        .map(|date| {
            format!(
                r#"<p class="data-updated">Dados atualizados em {}</p>"#,
                escape(&format_date_str(date, DateFormat::Long))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="section-cohort fade-in">{header}{updated}{filters}{insights}{heatmap}<div class="charts-grid">{curve}{size}{revenue}</div></section>"#,
        header = section_header(TITLE, SUBTITLE),
        updated = updated,
        filters = filters(period),
        insights = insights(&CohortInsights::compute(cohorts)),
        heatmap = heatmap(cohorts),
        curve = chart_card(
            RETENTION_CURVE_CANVAS,
            "Curvas de Retenção",
            "chart-card-wide"
        ),
        size = chart_card(SIZE_CANVAS, "Tamanho dos Cohorts", ""),
        revenue = chart_card(
            REVENUE_CANVAS,
            "Receita por Cohort (R$ mil)",
            ""
        ),
    )
}

fn filters(period: CohortPeriod) -> String {
    let options: String = CohortPeriod::all()
        .iter()
        .map(|option| {
            let selected = if *option == period { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                option.code(),
                selected,
                option.label()
            )
        })
        .collect();

    format!(
        r#"<div class="filters-bar"><label for="{select}">Período</label><select id="{select}" class="filter-select">{options}</select><button id="{reset}" class="btn btn-secondary">Limpar filtros</button></div>"#,
        select = PERIOD_SELECT_ID,
        options = options,
        reset = RESET_BUTTON_ID,
    )
}

fn insights(insights: &CohortInsights) -> String {
    let (best_label, best_value) = match &insights.best_m1 {
        Some((name, value)) => (
            format!("Melhor Retenção M+1 ({})", name),
            format_percentage(*value, 0, false),
        ),
        None => ("Melhor Retenção M+1".to_string(), "-".to_string()),
    };

    format!(
        r#"<div class="stats-grid">{}{}{}{}</div>"#,
        stat_item(&best_label, &best_value),
        stat_item("Retenção Média M+3", &format_percentage(insights.mean_m3, 1, false)),
        stat_item("Retenção Média M+6", &format_percentage(insights.mean_m6, 1, false)),
        stat_item(
            "Dispersão M+1 (desvio padrão)",
            &format!("{} p.p.", format_number_with_separator(insights.m1_spread, 1))
        ),
    )
}

/// Retention table: one row per cohort, one column per month offset.
pub fn heatmap(cohorts: &[CohortRecord]) -> String {
    let columns = max_offset(cohorts);

    let head: String = (0..columns)
        .map(|offset| format!("<th>M+{}</th>", offset))
        .collect();

    let rows: String = cohorts
        .iter()
        .map(|cohort| {
            let cells: String = (0..columns)
                .map(|offset| retention_cell(cohort.retention_at(offset)))
                .collect();
            format!(
                r#"<tr><td class="cohort-name">{}</td><td class="cohort-size">{}</td>{}</tr>"#,
                escape(&cohort.name),
                format_number_with_separator(cohort.size as f64, 0),
                cells
            )
        })
        .collect();

    format!(
        r#"<div class="cohort-heatmap"><table class="cohort-table"><thead><tr><th>Cohort</th><th>Clientes</th>{}</tr></thead><tbody>{}</tbody></table></div>"#,
        head, rows
    )
}

fn retention_cell(value: Option<f64>) -> String {
    match value {
        Some(value) => format!(
            r#"<td class="cohort-cell" style="background-color: {}">{}</td>"#,
            retention_color(value),
            retention_label(value)
        ),
        None => r#"<td class="cohort-cell empty">-</td>"#.to_string(),
    }
}

/// Whole percentages without decimals, anything else with one.
fn retention_label(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 1 };
    format_percentage(value, decimals, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cohort(name: &str, retention: Vec<Option<f64>>) -> CohortRecord {
        CohortRecord {
            name: name.to_string(),
            size: 1250,
            revenue: 850.0,
            retention,
        }
    }

    #[test]
    fn unobserved_months_render_as_empty_cells() {
        let html = heatmap(&[cohort("Jan/24", vec![Some(100.0), Some(73.0), None])]);
        assert!(html.contains("<th>M+2</th>"));
        assert!(html.contains(r#"<td class="cohort-cell empty">-</td>"#));
        assert!(html.contains(r#"<td class="cohort-size">1.250</td>"#));
    }

    #[test]
    fn cell_colors_follow_thresholds() {
        let html = heatmap(&[cohort("Jan/24", vec![Some(100.0), Some(38.0)])]);
        assert!(html.contains(r#"style="background-color: #CCFF00">100%</td>"#));
        assert!(html.contains(r#"style="background-color: #FFBA08">38%</td>"#));
    }

    #[test]
    fn fractional_retention_keeps_one_decimal() {
        assert_eq!(retention_label(41.0), "41%");
        assert_eq!(retention_label(41.26), "41.3%");
    }

    #[test]
    fn selected_period_is_marked() {
        let html = filters(CohortPeriod::SixMonths);
        assert!(html.contains(r#"<option value="6m" selected>"#));
        assert!(html.contains(r#"<option value="12m">"#));
    }

    #[test]
    fn rows_shorter_than_the_widest_are_padded() {
        let html = heatmap(&[
            cohort("Jan/24", vec![Some(100.0), Some(70.0), Some(55.0)]),
            cohort("Fev/24", vec![Some(100.0)]),
        ]);
        let fev = html.split("Fev/24").nth(1).unwrap_or_default();
        assert_eq!(fev.matches("cohort-cell empty").count(), 2);
    }
}
