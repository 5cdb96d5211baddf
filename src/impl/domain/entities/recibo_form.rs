use super::recibo::FormaPago;

/// Values submitted through the receipt form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NuevoRecibo {
    pub recibido_de: String,
    pub suma: String,
    pub forma_pago: FormaPago,
    pub concepto: String,
    pub saldo: String,
}

impl NuevoRecibo {
    /// First required field left empty, if any. Mirrors a `required` form
    /// input, so whitespace-only values are accepted.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("recibidoDe", &self.recibido_de),
            ("suma", &self.suma),
            ("concepto", &self.concepto),
            ("saldo", &self.saldo),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}
