use shelter::Animal;
use tracing::{debug, info, warn};

use crate::host::{Host, Notice, SharePayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    ShareFailed,
    Copied,
    CopiedLegacy,
    CopyFailed,
}

pub fn blurb(animal: &Animal) -> String {
    let hashtag: String = animal.nombre.split_whitespace().collect();

    format!(
        "¡Conoce a {}! Un {} de {} años busca familia.\n\n\
         🏠 Villa Pirritx - Protectora de Animales\n\
         💖 Ayúdanos a difundir para encontrarle un hogar\n\n\
         #AdopcionResponsable #VillaPirritx #{hashtag}",
        animal.nombre, animal.raza, animal.edad
    )
}

pub fn payload(animal: &Animal, url: Option<String>) -> SharePayload {
    SharePayload {
        title: format!("Adopta a {}", animal.nombre),
        text: blurb(animal),
        url,
    }
}

/// Native share when the host has it, clipboard otherwise. Never fails, the
/// outcome only says which path was taken.
pub async fn share_animal<H: Host>(host: &H, animal: &Animal) -> ShareOutcome {
    let payload = payload(animal, host.page_url());

    if host.can_share() {
        return match host.share(&payload).await {
            Ok(()) => {
                info!("Shared {}", animal.nombre);
                ShareOutcome::Shared
            }
            Err(e) => {
                warn!("Error sharing {}: {e}", animal.nombre);
                ShareOutcome::ShareFailed
            }
        };
    }

    let outcome = copy(host, &payload.text).await;

    match outcome {
        ShareOutcome::CopyFailed => host.notify(&Notice::CopyFailed),
        _ => host.notify(&host.copy_notice()),
    }

    outcome
}

async fn copy<H: Host>(host: &H, text: &str) -> ShareOutcome {
    let Err(e) = host.write_clipboard(text).await else {
        return ShareOutcome::Copied;
    };

    debug!("Clipboard write failed ({e}), using legacy copy");

    match host.legacy_copy(text) {
        Ok(()) => ShareOutcome::CopiedLegacy,
        Err(e) => {
            warn!("Legacy copy failed: {e}");
            ShareOutcome::CopyFailed
        }
    }
}
