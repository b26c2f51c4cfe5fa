use std::{fmt, future::Future};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("{0} is not available")]
    Unavailable(&'static str),

    #[error("Rejected by host: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

/// Messages shown to the user straight away, as opposed to the advisory that
/// sits above the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NothingUrgent,
    CopiedToClipboard,
    PrintedForCopy,
    CopyFailed,
    DetailsComingSoon { nombre: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NothingUrgent => {
                write!(f, "¡Genial! No hay animales en situación urgente en este momento 😊")
            }
            Notice::CopiedToClipboard => write!(
                f,
                "¡Información copiada al portapapeles! Compártela en tus redes sociales 📱"
            ),
            Notice::PrintedForCopy => {
                write!(f, "Copia el texto de arriba y compártelo en tus redes sociales 📱")
            }
            Notice::CopyFailed => write!(f, "No se pudo copiar la información"),
            Notice::DetailsComingSoon { nombre } => write!(
                f,
                "¡Conoce más sobre {nombre}! (Próximamente página de detalles)"
            ),
        }
    }
}

/// Whatever the listing runs inside of: a browser, a terminal, a test.
pub trait Host {
    fn can_share(&self) -> bool;

    fn share(
        &self,
        payload: &SharePayload,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    fn write_clipboard(&self, text: &str) -> impl Future<Output = Result<(), HostError>> + Send;

    fn legacy_copy(&self, text: &str) -> Result<(), HostError>;

    fn notify(&self, notice: &Notice);

    /// Shown once the share text was handed over by `write_clipboard` or
    /// `legacy_copy`.
    fn copy_notice(&self) -> Notice {
        Notice::CopiedToClipboard
    }

    fn page_url(&self) -> Option<String> {
        None
    }
}

/// Host for the command line: no native share and no clipboard, so shared
/// text is written to stdout for the user to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl Host for TerminalHost {
    fn can_share(&self) -> bool {
        false
    }

    async fn share(&self, _payload: &SharePayload) -> Result<(), HostError> {
        Err(HostError::Unavailable("native share"))
    }

    async fn write_clipboard(&self, _text: &str) -> Result<(), HostError> {
        Err(HostError::Unavailable("clipboard"))
    }

    fn legacy_copy(&self, text: &str) -> Result<(), HostError> {
        println!("{text}\n");
        Ok(())
    }

    fn notify(&self, notice: &Notice) {
        println!("{notice}");
    }

    fn copy_notice(&self) -> Notice {
        Notice::PrintedForCopy
    }
}
