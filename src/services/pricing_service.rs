//! Cálculo de precios de reserva
//!
//! Computación pura sobre entradas ya validadas: número de días de
//! alquiler y total. Tarifas y totales son enteros no negativos en la
//! unidad mínima de moneda; el formateo decimal es presentación.

use chrono::NaiveDate;

/// Número de días de alquiler para [start, end) con fin exclusivo.
///
/// Equivale al ceil sobre milisegundos del cálculo original; con fechas
/// de calendario la diferencia ya es un número entero de días. Suelo
/// defensivo de 1 día si end <= start llega por ediciones independientes
/// del usuario (no es un camino de reserva válido).
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(1)
}

/// Precio total: días * tarifa diaria, en céntimos
pub fn quote_total(daily_rate: i64, start: NaiveDate, end: NaiveDate) -> i64 {
    rental_days(start, end) * daily_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_four_day_rental() {
        // 2024-01-01 a 2024-01-05 exclusivo = 4 días
        let start = date("2024-01-01");
        let end = date("2024-01-05");
        assert_eq!(rental_days(start, end), 4);
        assert_eq!(quote_total(5000, start, end), 20000);
    }

    #[test]
    fn test_single_day_rental() {
        assert_eq!(rental_days(date("2024-03-10"), date("2024-03-11")), 1);
        assert_eq!(quote_total(7500, date("2024-03-10"), date("2024-03-11")), 7500);
    }

    #[test]
    fn test_defensive_floor() {
        // end <= start nunca pasa la validación de reserva, pero el
        // cálculo nunca devuelve menos de 1 día
        assert_eq!(rental_days(date("2024-01-05"), date("2024-01-05")), 1);
        assert_eq!(rental_days(date("2024-01-05"), date("2024-01-01")), 1);
    }

    #[test]
    fn test_price_strictly_increasing_in_days() {
        let start = date("2024-06-01");
        let mut previous = 0;
        for extra in 1..30 {
            let end = start + chrono::Duration::days(extra);
            let total = quote_total(3200, start, end);
            assert!(total > previous);
            previous = total;
        }
    }

    #[test]
    fn test_total_is_days_times_rate() {
        let start = date("2024-02-01");
        let end = date("2024-02-29");
        assert_eq!(quote_total(9900, start, end), 28 * 9900);
    }
}
