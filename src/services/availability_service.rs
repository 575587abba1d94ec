//! Disponibilidad de vehículos
//!
//! Reglas puras del índice de disponibilidad: validación del rango de
//! fechas y el test de solapamiento de intervalos. El filtrado del
//! catálogo se ejecuta como una sola consulta SQL en el repositorio
//! de vehículos (nunca iterando reservas en el cliente); aquí vive la
//! regla para validarla antes de tocar la red y para el re-chequeo
//! del Booking Writer.

use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// Validar un rango de fechas de alquiler [start, end)
///
/// Rechaza start >= end antes de cualquier llamada a la base de datos.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start >= end {
        return Err(AppError::InvalidDateRange(format!(
            "La fecha de inicio ({}) debe ser anterior a la fecha de fin ({})",
            start, end
        )));
    }
    Ok(())
}

/// Test estándar de solapamiento de intervalos con fin exclusivo:
/// una reserva [b_start, b_end) choca con [start, end) iff
/// b_start < end AND b_end > start.
pub fn ranges_overlap(
    b_start: NaiveDate,
    b_end: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    b_start < end && b_end > start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range(date("2024-01-01"), date("2024-01-05")).is_ok());
        assert!(validate_date_range(date("2024-01-05"), date("2024-01-05")).is_err());
        assert!(validate_date_range(date("2024-01-06"), date("2024-01-05")).is_err());
    }

    #[test]
    fn test_overlap_at_single_day() {
        // Reserva existente [01-03, 01-06); petición [01-05, 01-08)
        // choca en el día 01-05
        assert!(ranges_overlap(
            date("2024-01-03"),
            date("2024-01-06"),
            date("2024-01-05"),
            date("2024-01-08"),
        ));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        // Fin exclusivo: [01-03, 01-06) y [01-06, 01-09) no chocan
        assert!(!ranges_overlap(
            date("2024-01-03"),
            date("2024-01-06"),
            date("2024-01-06"),
            date("2024-01-09"),
        ));
        assert!(!ranges_overlap(
            date("2024-01-06"),
            date("2024-01-09"),
            date("2024-01-03"),
            date("2024-01-06"),
        ));
    }

    #[test]
    fn test_contained_range_overlaps() {
        assert!(ranges_overlap(
            date("2024-01-01"),
            date("2024-01-31"),
            date("2024-01-10"),
            date("2024-01-12"),
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            ("2024-01-03", "2024-01-06", "2024-01-05", "2024-01-08"),
            ("2024-01-01", "2024-01-02", "2024-01-02", "2024-01-03"),
            ("2024-02-01", "2024-02-10", "2024-02-09", "2024-02-10"),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(
                ranges_overlap(date(a1), date(a2), date(b1), date(b2)),
                ranges_overlap(date(b1), date(b2), date(a1), date(a2)),
            );
        }
    }
}
