use crate::{
    entities::Recibo,
    presentation::utils::{format_amount, format_forma_pago},
};

pub(crate) const PLACEHOLDER_KEYS: [&str; 8] = [
    "id",
    "fecha",
    "numero",
    "recibidoDe",
    "suma",
    "formaPago",
    "concepto",
    "saldo",
];

/// One row of the receipts table, formatted for display.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TableRow {
    pub id: String,
    pub fecha: String,
    pub numero: String,
    pub recibido_de: String,
    pub suma: String,
    pub forma_pago: String,
    pub concepto: String,
    pub saldo: String,
}

impl Recibo {
    pub(crate) fn table_row(&self) -> TableRow {
        TableRow {
            id: self.id.0.clone(),
            fecha: self.fecha.clone(),
            numero: self.numero.clone(),
            recibido_de: self.recibido_de.clone(),
            suma: format_amount(&self.suma),
            forma_pago: format_forma_pago(&self.forma_pago),
            concepto: self.concepto.clone(),
            saldo: format_amount(&self.saldo),
        }
    }

    /// Values available to card templates, keyed by their JSON field name.
    pub(crate) fn placeholder(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.0.clone()),
            "fecha" => Some(self.fecha.clone()),
            "numero" => Some(self.numero.clone()),
            "recibidoDe" => Some(self.recibido_de.clone()),
            "suma" => Some(format_amount(&self.suma)),
            "formaPago" => Some(format_forma_pago(&self.forma_pago)),
            "concepto" => Some(self.concepto.clone()),
            "saldo" => Some(format_amount(&self.saldo)),
            _ => None,
        }
    }
}
