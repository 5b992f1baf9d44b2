#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    Primary,
    Success,
    Warning,
    Danger,
    #[default]
    Mixed,
}

impl Palette {
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            Palette::Primary => &["#2563eb", "#60a5fa", "#93c5fd", "#dbeafe"],
            Palette::Success => &["#10b981", "#34d399", "#6ee7b7", "#a7f3d0"],
            Palette::Warning => &["#f59e0b", "#fbbf24", "#fcd34d", "#fde68a"],
            Palette::Danger => &["#ef4444", "#f87171", "#fca5a5", "#fecaca"],
            Palette::Mixed => &["#2563eb", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4"],
        }
    }
}

/// `count` colors from `palette`, cycling when more are needed than it holds.
pub fn chart_colors(palette: Palette, count: usize) -> Vec<String> {
    palette
        .colors()
        .iter()
        .cycle()
        .take(count)
        .map(|color| color.to_string())
        .collect()
}

/// `#rrggbb` → `rgba(r, g, b, alpha)`. Anything else is returned unchanged.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
    let digits = match hex.strip_prefix('#') {
        Some(digits) if digits.len() == 6 => digits,
        _ => return hex.to_string(),
    };
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}
