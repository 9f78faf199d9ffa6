//! Aggregate figures for the practice dashboard.
//!
//! Rates are reported as strings with one decimal place and a trailing
//! percent sign, e.g. `"66.7%"`. A practice with no recorded sessions
//! reports `"0.0%"` for both rates rather than dividing by zero.

use serde::Serialize;

/// Aggregate counts and rates over the whole practice.
#[derive(Debug, Clone, Serialize)]
pub struct ResumenPractica {
    pub total_pacientes: i64,
    pub total_sesiones: i64,
    pub porcentaje_asistencia: String,
    pub porcentaje_pago: String,
}

impl ResumenPractica {
    /// Assemble the summary from raw counts.
    ///
    /// `asistencias` and `pagos` are the number of sessions with the
    /// respective flag set; both are rated against `total_sesiones`.
    pub fn from_counts(
        total_pacientes: i64,
        total_sesiones: i64,
        asistencias: i64,
        pagos: i64,
    ) -> Self {
        Self {
            total_pacientes,
            total_sesiones,
            porcentaje_asistencia: format_rate(asistencias, total_sesiones),
            porcentaje_pago: format_rate(pagos, total_sesiones),
        }
    }
}

/// Format `flagged / total` as a percentage string with one decimal place.
///
/// Returns `"0.0%"` when `total` is zero.
pub fn format_rate(flagged: i64, total: i64) -> String {
    if total <= 0 {
        return "0.0%".to_string();
    }
    let rate = (flagged as f64 / total as f64) * 100.0;
    format!("{rate:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sessions_yields_zero_rate() {
        assert_eq!(format_rate(0, 0), "0.0%");
        // A flagged count with no total would be inconsistent input, but it
        // must still not divide by zero.
        assert_eq!(format_rate(3, 0), "0.0%");
    }

    #[test]
    fn rates_round_to_one_decimal() {
        assert_eq!(format_rate(2, 3), "66.7%");
        assert_eq!(format_rate(1, 3), "33.3%");
        assert_eq!(format_rate(1, 8), "12.5%");
    }

    #[test]
    fn full_and_empty_rates() {
        assert_eq!(format_rate(4, 4), "100.0%");
        assert_eq!(format_rate(0, 4), "0.0%");
    }

    #[test]
    fn summary_assembles_both_rates() {
        let resumen = ResumenPractica::from_counts(2, 4, 3, 1);
        assert_eq!(resumen.total_pacientes, 2);
        assert_eq!(resumen.total_sesiones, 4);
        assert_eq!(resumen.porcentaje_asistencia, "75.0%");
        assert_eq!(resumen.porcentaje_pago, "25.0%");
    }

    #[test]
    fn summary_with_no_sessions() {
        let resumen = ResumenPractica::from_counts(5, 0, 0, 0);
        assert_eq!(resumen.porcentaje_asistencia, "0.0%");
        assert_eq!(resumen.porcentaje_pago, "0.0%");
    }
}
