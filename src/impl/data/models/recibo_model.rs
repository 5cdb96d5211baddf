use crate::entities::{Recibo, ReciboId};

/// Wire and on-disk shape of a receipt. The endpoint stores whatever it is
/// sent, so absent keys load as empty strings.
#[derive(Debug, Clone, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ReciboModel {
    pub(crate) id: String,
    pub(crate) fecha: String,
    pub(crate) numero: String,
    pub(crate) recibido_de: String,
    pub(crate) suma: String,
    pub(crate) forma_pago: String,
    pub(crate) concepto: String,
    pub(crate) saldo: String,
}

impl Into<Recibo> for ReciboModel {
    fn into(self) -> Recibo {
        Recibo {
            id: ReciboId(self.id),
            fecha: self.fecha,
            numero: self.numero,
            recibido_de: self.recibido_de,
            suma: self.suma,
            forma_pago: self.forma_pago,
            concepto: self.concepto,
            saldo: self.saldo,
        }
    }
}

impl From<&Recibo> for ReciboModel {
    fn from(recibo: &Recibo) -> Self {
        Self {
            id: recibo.id.0.clone(),
            fecha: recibo.fecha.clone(),
            numero: recibo.numero.clone(),
            recibido_de: recibo.recibido_de.clone(),
            suma: recibo.suma.clone(),
            forma_pago: recibo.forma_pago.clone(),
            concepto: recibo.concepto.clone(),
            saldo: recibo.saldo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_camel_case_keys() {
        let raw = r#"{"id":"1","fecha":"2024-05-01","numero":"SANGL-2024-12345","recibidoDe":"Juan Perez","suma":"100","formaPago":"efectivo","concepto":"Inscripción","saldo":"0"}"#;
        let model: ReciboModel = serde_json::from_str(raw).unwrap();
        let recibo: Recibo = model.into();
        assert_eq!(recibo.recibido_de, "Juan Perez");
        assert_eq!(recibo.forma_pago, "efectivo");

        let back = serde_json::to_value(ReciboModel::from(&recibo)).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn missing_fields_load_as_empty() {
        let raw = r#"{"id":"1","fecha":"2024-05-01"}"#;
        let recibo: Recibo = serde_json::from_str::<ReciboModel>(raw).unwrap().into();
        assert_eq!(recibo.id, ReciboId("1".into()));
        assert_eq!(recibo.fecha, "2024-05-01");
        assert_eq!(recibo.saldo, "");
        assert_eq!(recibo.recibido_de, "");
    }
}
