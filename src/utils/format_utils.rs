/// "80.0%"
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// "-20.0%" / "+1.5%"
pub fn format_signed_pct(value: f64) -> String {
    format!("{:+.1}%", value)
}

/// "1.600 Ah"
pub fn format_capacity(ah: f64) -> String {
    format!("{:.3} Ah", ah)
}

pub fn format_rul(cycles: Option<u32>) -> String {
    match cycles {
        Some(1) => "1 cycle".to_string(),
        Some(c) => format!("{} cycles", c),
        None => "no fade trend".to_string(),
    }
}

pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(t) => format!("{:.1}°C", t),
        None => "n/a".to_string(),
    }
}

/// Slope per 100 cycles reads better than per cycle: "-0.400 Ah/100cyc"
pub fn format_fade_rate(slope_per_cycle: f64) -> String {
    format!("{:+.3} Ah/100cyc", slope_per_cycle * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_kpis() {
        assert_eq!(format_pct(80.0), "80.0%");
        assert_eq!(format_signed_pct(-20.0), "-20.0%");
        assert_eq!(format_capacity(1.6), "1.600 Ah");
        assert_eq!(format_rul(Some(50)), "50 cycles");
        assert_eq!(format_rul(Some(1)), "1 cycle");
        assert_eq!(format_rul(None), "no fade trend");
        assert_eq!(format_temperature(Some(24.0)), "24.0°C");
        assert_eq!(format_temperature(None), "n/a");
        assert_eq!(format_fade_rate(-0.004), "-0.400 Ah/100cyc");
    }
}
