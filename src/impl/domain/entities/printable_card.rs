use async_trait::async_trait;
use base64::Engine as _;
use fractic_server_error::ServerError;

use super::recibo::ReciboId;

/// Printable rendering of a single receipt, already laid out into lines.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PrintableCard {
    pub recibo_id: ReciboId,
    pub lines: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns a card into PNG bytes. The pixel work is delegated entirely to the
/// implementor.
#[async_trait]
pub trait CardRasterizer: Send + Sync {
    async fn rasterize(&self, card: &PrintableCard) -> Result<Vec<u8>, ServerError>;
}

// --

impl PrintableCard {
    pub fn render_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn file_name(&self) -> String {
        format!("recibo-{}.png", self.recibo_id)
    }
}

impl ExportedImage {
    pub fn data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}
