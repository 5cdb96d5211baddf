#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Toast produced by a view-model mutation. Rendering is up to the caller.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

// --

impl Notification {
    fn new(title: &str, description: &str, variant: NotificationVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn recibo_generado() -> Self {
        Self::new(
            "Recibo generado",
            "El recibo ha sido creado y almacenado correctamente.",
            NotificationVariant::Default,
        )
    }

    pub fn recibo_eliminado() -> Self {
        Self::new(
            "Recibo eliminado",
            "El recibo ha sido eliminado correctamente.",
            NotificationVariant::Destructive,
        )
    }

    pub fn error_al_guardar() -> Self {
        Self::new(
            "Error al guardar",
            "Los cambios no pudieron ser almacenados.",
            NotificationVariant::Destructive,
        )
    }
}
