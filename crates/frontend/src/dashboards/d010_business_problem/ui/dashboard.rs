use crate::routes::{View, ViewContext};
use crate::shared::dom::Outlet;
use crate::shared::markup::section_header;
use std::rc::Rc;

const PAIN_POINTS: [(&str, &str); 3] = [
    (
        "Alta Taxa de Churn",
        "32% dos clientes novos param de comprar no primeiro trimestre, desperdiçando o investimento em aquisição",
    ),
    (
        "ROI de Aquisição Baixo",
        "CAC de R$ 180 contra LTV de R$ 1.850 resulta em payback longo demais",
    ),
    (
        "Falta de Segmentação",
        "Uma única estratégia para toda a base não atende às necessidades de cada perfil",
    ),
];

const HYPOTHESES: [&str; 4] = [
    "Cohorts de períodos diferentes retêm de forma distinta por sazonalidade e mudanças no produto",
    "Segmentos RFM diferentes pedem estratégias de engajamento personalizadas",
    "O canal de aquisição influencia a qualidade e a retenção dos clientes",
    "Há uma janela crítica nos primeiros 30 a 60 dias em que a intervenção maximiza a retenção",
];

const STEPS: [(&str, &str); 4] = [
    ("Análise de Cohort", "Identificar padrões de retenção ao longo do tempo"),
    ("Segmentação RFM", "Classificar clientes por Recência, Frequência e Valor"),
    ("Análise Descritiva", "Explorar correlações e métricas operacionais"),
    ("Recomendações", "Propor ações baseadas em dados"),
];

/// Static context page.
pub struct BusinessProblemView {
    outlet: Rc<dyn Outlet>,
}

impl BusinessProblemView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            outlet: ctx.outlet.clone(),
        }
    }
}

impl View for BusinessProblemView {
    fn render(&mut self) {
        self.outlet.set_html(&page());
    }

    fn destroy(&mut self) {}
}

fn page() -> String {
    let pain_points: String = PAIN_POINTS
        .iter()
        .map(|(title, text)| {
            format!(r#"<div class="pain-point-card"><h3>{}</h3><p>{}</p></div>"#, title, text)
        })
        .collect();

    let hypotheses: String = HYPOTHESES
        .iter()
        .map(|text| format!(r#"<div class="hypothesis-item"><p>{}</p></div>"#, text))
        .collect();

    let steps: String = STEPS
        .iter()
        .enumerate()
        .map(|(index, (title, text))| {
            format!(
                r#"<div class="methodology-step"><div class="methodology-step-number">{}</div><h3>{}</h3><p>{}</p></div>"#,
                index + 1,
                title,
                text
            )
        })
        .collect();

    format!(
        r#"<section class="section-business-problem fade-in">{header}<div class="context-section"><h2>Contexto</h2><p>A aquisição de clientes cresceu 45% nos últimos 12 meses, mas 32% dos novos clientes deixam de comprar ainda no primeiro trimestre.</p><p>Isso representa uma perda potencial de <strong>R$ 2.8M por ano</strong> em receita recorrente e exige entender melhor o comportamento dos clientes para reter com eficiência.</p></div><div class="pain-points-grid">{pain_points}</div><div class="hypothesis-section"><h2>Hipóteses a Investigar</h2><div class="hypothesis-list">{hypotheses}</div></div><div class="methodology-diagram"><h2>Metodologia de Análise</h2><div class="methodology-steps">{steps}</div></div></section>"#,
        header = section_header(
            "Problema de Negócio",
            "Contexto e objetivos da análise de retenção e segmentação"
        ),
        pain_points = pain_points,
        hypotheses = hypotheses,
        steps = steps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::Harness;

    #[test]
    fn renders_without_data_or_charts() {
        let harness = Harness::new();
        let mut view = BusinessProblemView::new(&harness.ctx);
        view.render();
        harness.run();

        let html = harness.outlet.html();
        assert!(html.contains("Hipóteses a Investigar"));
        assert_eq!(html.matches("pain-point-card").count(), 3);
        assert_eq!(html.matches("methodology-step-number").count(), 4);
        assert_eq!(harness.charts.created(), 0);

        view.destroy();
    }
}
