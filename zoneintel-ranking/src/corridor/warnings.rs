//! Route warning messages. Each condition gets its own builder so tests
//! can assert a warning's presence independently of the others.

pub fn warn_low_vitality(vitality: f64) -> String {
    format!("zone vitality is low ({vitality:.1}); stay on main roads")
}

pub fn warn_eta_over_limit(estimated_minutes: f64, limit_minutes: f64) -> String {
    format!(
        "estimated walk of {estimated_minutes:.0} min exceeds the {limit_minutes:.0} min limit"
    )
}

pub fn warn_no_corridors() -> String {
    "no safe corridors available; routing direct".to_string()
}

pub fn warn_avoided_offline(count: usize) -> String {
    format!("avoided {count} corridor(s) in offline zones")
}
