//! Option presets shared by every chart of the dashboard.

use serde_json::{json, Value};

pub fn chart_defaults() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "position": "top",
                "labels": {
                    "font": { "family": "Inter", "size": 12, "weight": "500" },
                    "usePointStyle": true,
                    "padding": 16,
                    "color": "#374151"
                }
            },
            "tooltip": {
                "backgroundColor": "rgba(0, 0, 0, 0.9)",
                "padding": 12,
                "titleFont": { "size": 14, "weight": "600" },
                "bodyFont": { "size": 13 },
                "cornerRadius": 8,
                "displayColors": true,
                "borderColor": "rgba(255, 255, 255, 0.1)",
                "borderWidth": 1
            }
        },
        "scales": {
            "x": {
                "grid": { "display": false, "drawBorder": false },
                "ticks": { "font": { "size": 11 }, "color": "#9ca3af" }
            },
            "y": {
                "grid": { "color": "rgba(0, 0, 0, 0.05)", "drawBorder": false },
                "ticks": { "font": { "size": 11 }, "color": "#9ca3af" }
            }
        }
    })
}

pub fn line_options() -> Value {
    with_defaults(json!({
        "elements": {
            "line": { "tension": 0.4, "borderWidth": 2 },
            "point": { "radius": 4, "hoverRadius": 6, "borderWidth": 2, "backgroundColor": "#ffffff" }
        }
    }))
}

pub fn bar_options() -> Value {
    with_defaults(json!({
        "elements": {
            "bar": { "borderRadius": 6, "borderWidth": 0 }
        }
    }))
}

pub fn horizontal_bar_options() -> Value {
    let mut options = bar_options();
    merge_options(&mut options, json!({ "indexAxis": "y" }));
    options
}

/// Doughnut preset. No axes, legend on the right.
pub fn pie_options() -> Value {
    let defaults = chart_defaults();
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "position": "right",
                "labels": {
                    "font": { "family": "Inter", "size": 12 },
                    "padding": 16,
                    "usePointStyle": true
                }
            },
            "tooltip": defaults["plugins"]["tooltip"].clone()
        }
    })
}

pub fn radar_options() -> Value {
    let defaults = chart_defaults();
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": defaults["plugins"].clone(),
        "scales": {
            "r": {
                "beginAtZero": true,
                "max": 100,
                "ticks": { "stepSize": 20, "display": false },
                "grid": { "color": "rgba(0, 0, 0, 0.05)" }
            }
        }
    })
}

/// Recursively merges `overlay` into `base`. Objects merge key by key; any
/// other value in `overlay` replaces the one in `base`.
pub fn merge_options(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_options(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn with_defaults(overlay: Value) -> Value {
    let mut options = chart_defaults();
    merge_options(&mut options, overlay);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_deep() {
        let mut base = json!({ "a": { "b": 1, "c": 2 }, "d": [1, 2] });
        merge_options(&mut base, json!({ "a": { "c": 3 }, "d": [9], "e": true }));
        assert_eq!(base, json!({ "a": { "b": 1, "c": 3 }, "d": [9], "e": true }));
    }

    #[test]
    fn presets_extend_defaults() {
        let line = line_options();
        assert_eq!(line["elements"]["line"]["tension"], 0.4);
        assert_eq!(line["scales"]["x"]["grid"]["display"], false);

        let horizontal = horizontal_bar_options();
        assert_eq!(horizontal["indexAxis"], "y");
        assert_eq!(horizontal["elements"]["bar"]["borderRadius"], 6);
    }

    #[test]
    fn doughnut_and_radar_have_no_cartesian_axes() {
        assert!(pie_options().get("scales").is_none());
        assert!(radar_options()["scales"].get("x").is_none());
        assert_eq!(radar_options()["scales"]["r"]["max"], 100);
    }
}
