use crate::entities::FormaPago;

/// Amounts are displayed exactly as typed, behind a `$` sign. No parsing,
/// rounding or thousands separators.
pub(crate) fn format_amount(raw: &str) -> String {
    format!("${}", raw)
}

/// Option label for a stored payment method, or the stored value itself when
/// it is not one of the known options.
pub(crate) fn format_forma_pago(raw: &str) -> String {
    FormaPago::from_value(raw)
        .map(|f| f.label().to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_keeps_raw_text() {
        assert_eq!(format_amount("100"), "$100");
        assert_eq!(format_amount("1500.5"), "$1500.5");
        assert_eq!(format_amount("abc"), "$abc");
    }

    #[test]
    fn forma_pago_uses_label_when_known() {
        assert_eq!(format_forma_pago("efectivo"), "Efectivo");
        assert_eq!(format_forma_pago("transferencia"), "Transferencia");
        assert_eq!(format_forma_pago("cheque"), "cheque");
    }
}
