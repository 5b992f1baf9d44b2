/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const ROUTES: [RouteDef; 6] = [
    RouteDef { path: "/", label: "Apresentação", icon: "home" },
    RouteDef { path: "/problem", label: "Problema de Negócio", icon: "target" },
    RouteDef { path: "/cohort", label: "Análise de Cohort", icon: "grid" },
    RouteDef { path: "/rfm", label: "Segmentação RFM", icon: "users" },
    RouteDef { path: "/descriptive-a", label: "Análise Descritiva A", icon: "bar-chart" },
    RouteDef { path: "/descriptive-b", label: "Análise Descritiva B", icon: "trending-up" },
];

/// Breadcrumb text for a path; `Dashboard` for anything unmapped.
pub fn breadcrumb_label(path: &str) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.label)
        .unwrap_or("Dashboard")
}
