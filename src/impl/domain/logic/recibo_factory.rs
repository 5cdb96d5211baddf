use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::entities::{NuevoRecibo, Recibo, ReciboId};

const NUMERO_MIN: u32 = 10000;
const NUMERO_MAX: u32 = 99999;
const MAX_NUMERO_ATTEMPTS: usize = 32;

/// Synthesizes the generated fields (`id`, `fecha`, `numero`) of a new
/// receipt.
pub(crate) struct ReciboFactory {
    numero_prefix: String,
}

impl ReciboFactory {
    pub(crate) fn new(numero_prefix: impl Into<String>) -> Self {
        Self {
            numero_prefix: numero_prefix.into(),
        }
    }

    pub(crate) fn build(&self, form: NuevoRecibo, fecha: NaiveDate, existing: &[Recibo]) -> Recibo {
        let numero = self.numero(&mut rand::thread_rng(), existing);
        Recibo {
            id: ReciboId(Uuid::new_v4().to_string()),
            fecha: fecha.format("%Y-%m-%d").to_string(),
            numero,
            recibido_de: form.recibido_de,
            suma: form.suma,
            forma_pago: form.forma_pago.value().to_string(),
            concepto: form.concepto,
            saldo: form.saldo,
        }
    }

    /// `<prefix>-<5 digits>`, redrawn while it collides with an existing
    /// receipt. Uniqueness is best-effort: after the last attempt the
    /// colliding number is kept.
    pub(crate) fn numero<R: Rng>(&self, rng: &mut R, existing: &[Recibo]) -> String {
        let mut candidate = self.draw(rng);
        for _ in 1..MAX_NUMERO_ATTEMPTS {
            if !existing.iter().any(|r| r.numero == candidate) {
                return candidate;
            }
            candidate = self.draw(rng);
        }
        debug!(numero = %candidate, "no free recibo number found, keeping collision");
        candidate
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> String {
        format!(
            "{}-{}",
            self.numero_prefix,
            rng.gen_range(NUMERO_MIN..=NUMERO_MAX)
        )
    }
}
