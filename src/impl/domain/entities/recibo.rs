use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ReciboId(pub String);

impl fmt::Display for ReciboId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A payment receipt as held by the client.
///
/// Every field is carried as text. `suma` and `saldo` are never parsed, and
/// `forma_pago` keeps whatever value was stored even when it is not one of
/// the known [`FormaPago`] options.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Recibo {
    pub id: ReciboId,
    /// ISO date (`YYYY-MM-DD`), fixed at creation time.
    pub fecha: String,
    pub numero: String,
    pub recibido_de: String,
    pub suma: String,
    pub forma_pago: String,
    pub concepto: String,
    pub saldo: String,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FormaPago {
    Efectivo,
    Tarjeta,
    Transferencia,
}

// --

impl Recibo {
    /// Raw values of every field, in declaration order.
    pub fn field_values(&self) -> [&str; 8] {
        [
            &self.id.0,
            &self.fecha,
            &self.numero,
            &self.recibido_de,
            &self.suma,
            &self.forma_pago,
            &self.concepto,
            &self.saldo,
        ]
    }
}

impl FormaPago {
    pub const ALL: [FormaPago; 3] = [
        FormaPago::Efectivo,
        FormaPago::Tarjeta,
        FormaPago::Transferencia,
    ];

    /// Stored value.
    pub fn value(&self) -> &'static str {
        match self {
            FormaPago::Efectivo => "efectivo",
            FormaPago::Tarjeta => "tarjeta",
            FormaPago::Transferencia => "transferencia",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            FormaPago::Efectivo => "Efectivo",
            FormaPago::Tarjeta => "Tarjeta",
            FormaPago::Transferencia => "Transferencia",
        }
    }

    pub fn from_value(value: &str) -> Option<FormaPago> {
        FormaPago::ALL.into_iter().find(|f| f.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forma_pago_values_round_trip_through_lookup() {
        for forma in FormaPago::ALL {
            assert_eq!(FormaPago::from_value(forma.value()), Some(forma));
        }
        assert_eq!(FormaPago::from_value("Efectivo"), None);
        assert_eq!(FormaPago::from_value("cheque"), None);
    }

    #[test]
    fn field_values_cover_every_field() {
        let recibo = Recibo {
            id: ReciboId("1".into()),
            fecha: "2024-05-01".into(),
            numero: "SANGL-2024-12345".into(),
            recibido_de: "Juan Perez".into(),
            suma: "100".into(),
            forma_pago: "efectivo".into(),
            concepto: "Inscripción".into(),
            saldo: "0".into(),
        };
        assert_eq!(
            recibo.field_values(),
            [
                "1",
                "2024-05-01",
                "SANGL-2024-12345",
                "Juan Perez",
                "100",
                "efectivo",
                "Inscripción",
                "0"
            ]
        );
    }
}
