use fractic_server_error::ServerError;
use tracing::{debug, info, warn};

use crate::{
    config::RecibosConfig,
    domain::{
        logic::recibo_filter::ReciboFilter,
        repositories::recibos_repository::RecibosRepository,
        usecases::recibos_usecase::{RecibosUsecase as _, RecibosUsecaseImpl},
    },
    entities::{CardRasterizer, ExportedImage, Notification, NuevoRecibo, PrintableCard, Recibo},
    presentation::{card_printer::CardPrinter, recibo_fmt::TableRow},
};

/// Client-side state of the receipts page: the in-memory list, the free-text
/// filter and the dark-mode flag.
///
/// Every mutation rebuilds the whole list and immediately sends all of it to
/// the repository. A failed save is reported through the returned
/// notification only; the in-memory list is not rolled back, so it may run
/// ahead of what was persisted.
pub struct RecibosViewModel<R>
where
    R: RecibosRepository,
{
    usecase: RecibosUsecaseImpl<R>,
    card_printer: CardPrinter,
    recibos: Vec<Recibo>,
    filtro: String,
    dark_mode: bool,
}

impl<R> RecibosViewModel<R>
where
    R: RecibosRepository,
{
    pub fn new(repository: R, config: &RecibosConfig) -> Result<Self, ServerError> {
        Ok(Self {
            usecase: RecibosUsecaseImpl::new(repository, &config.numero_prefix),
            card_printer: CardPrinter::new(config.card.clone())?,
            recibos: Vec::new(),
            filtro: String::new(),
            dark_mode: false,
        })
    }

    /// Replaces the in-memory list with the persisted one. On failure the
    /// list is left empty.
    pub async fn load(&mut self) {
        match self.usecase.load().await {
            Ok(recibos) => {
                info!(count = recibos.len(), "recibos loaded");
                self.recibos = recibos;
            }
            Err(e) => {
                warn!(error = ?e, "loading recibos failed");
                self.recibos = Vec::new();
            }
        }
    }

    /// Appends a receipt built from `form` and persists the whole list.
    ///
    /// Only an incomplete form is an error; it leaves the state untouched.
    pub async fn create(&mut self, form: NuevoRecibo) -> Result<Notification, ServerError> {
        self.recibos = self.usecase.append(&self.recibos, form)?;
        Ok(self.persist(Notification::recibo_generado()).await)
    }

    /// Removes every receipt with exactly this id, then persists the whole
    /// list. Reports a deletion even when nothing matched.
    pub async fn delete(&mut self, id: &str) -> Notification {
        self.recibos = self.usecase.remove(&self.recibos, id);
        self.persist(Notification::recibo_eliminado()).await
    }

    async fn persist(&self, on_success: Notification) -> Notification {
        match self.usecase.persist(&self.recibos).await {
            Ok(()) => on_success,
            Err(e) => {
                warn!(error = ?e, count = self.recibos.len(), "saving recibos failed");
                Notification::error_al_guardar()
            }
        }
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filtro = text.into();
    }

    pub fn filter(&self) -> &str {
        &self.filtro
    }

    pub fn recibos(&self) -> &[Recibo] {
        &self.recibos
    }

    /// Receipts matching the current filter, in list order.
    pub fn filtered(&self) -> Vec<&Recibo> {
        ReciboFilter::new(&self.filtro).apply(&self.recibos)
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.filtered().into_iter().map(Recibo::table_row).collect()
    }

    /// One printable card per visible receipt.
    pub fn cards(&self) -> Vec<PrintableCard> {
        self.filtered()
            .into_iter()
            .map(|r| self.card_printer.print(r))
            .collect()
    }

    /// Rasterizes the card of a visible receipt. Returns `None` when no card
    /// is rendered for `id` (unknown or filtered out) or the rasterizer fails.
    pub async fn export_as_image<Z>(&self, id: &str, rasterizer: &Z) -> Option<ExportedImage>
    where
        Z: CardRasterizer + ?Sized,
    {
        let card = self
            .filtered()
            .into_iter()
            .find(|r| r.id.0 == id)
            .map(|r| self.card_printer.print(r));
        let Some(card) = card else {
            debug!(id, "no printable card for recibo");
            return None;
        };
        match rasterizer.rasterize(&card).await {
            Ok(bytes) => Some(ExportedImage {
                file_name: card.file_name(),
                bytes,
            }),
            Err(e) => {
                warn!(error = ?e, id, "rasterizing recibo card failed");
                None
            }
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}
