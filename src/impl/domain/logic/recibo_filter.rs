use crate::entities::Recibo;

/// Case-insensitive substring filter over every field of a receipt.
pub(crate) struct ReciboFilter {
    needle: String,
}

impl ReciboFilter {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub(crate) fn matches(&self, recibo: &Recibo) -> bool {
        recibo
            .field_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&self.needle))
    }

    pub(crate) fn apply<'a>(&self, recibos: &'a [Recibo]) -> Vec<&'a Recibo> {
        recibos.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReciboId;

    fn recibo(id: &str, recibido_de: &str, concepto: &str) -> Recibo {
        Recibo {
            id: ReciboId(id.into()),
            fecha: "2024-05-01".into(),
            numero: format!("SANGL-2024-1000{id}"),
            recibido_de: recibido_de.into(),
            suma: "100".into(),
            forma_pago: "efectivo".into(),
            concepto: concepto.into(),
            saldo: "0".into(),
        }
    }

    fn sample() -> Vec<Recibo> {
        vec![
            recibo("1", "Juan Perez", "Inscripción"),
            recibo("2", "Ana Gómez", "Uniformes"),
            recibo("3", "PEDRO juan", "Arbitraje"),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let recibos = sample();
        let ids: Vec<_> = ReciboFilter::new("")
            .apply(&recibos)
            .iter()
            .map(|r| r.id.0.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let recibos = sample();
        let ids: Vec<_> = ReciboFilter::new("JUAN")
            .apply(&recibos)
            .iter()
            .map(|r| r.id.0.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);

        assert_eq!(ReciboFilter::new("uniformes").apply(&recibos).len(), 1);
        assert_eq!(ReciboFilter::new("EFECTIVO").apply(&recibos).len(), 3);
        assert_eq!(ReciboFilter::new("sangl-2024-10002").apply(&recibos).len(), 1);
        assert!(ReciboFilter::new("tarjeta").apply(&recibos).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let recibos = sample();
        let filter = ReciboFilter::new("ar");
        let once: Vec<Recibo> = filter.apply(&recibos).into_iter().cloned().collect();
        let twice: Vec<Recibo> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
