use std::{borrow::Cow, fmt};

use shelter::{Animal, AnimalSource, SearchCriteria};
use tracing::{info, warn};

use crate::{
    host::{Host, Notice},
    samples,
    share::{ShareOutcome, share_animal},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Live,
    Fallback,
}

/// Banner explaining why the listing is not showing live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    NoLiveRecords,
    ConnectionFailure,
    FilterFailure,
    UrgentSamples,
    UrgentConnectionFailure,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Advisory::NoLiveRecords => {
                "Mostrando datos de ejemplo (no hay animales en el servidor)"
            }
            Advisory::ConnectionFailure => {
                "No se pudo conectar con el servidor. Mostrando datos de ejemplo."
            }
            Advisory::FilterFailure => "Error al filtrar. Usando datos locales.",
            Advisory::UrgentSamples => "Mostrando datos de ejemplo (sin conexión con servidor)",
            Advisory::UrgentConnectionFailure => "Error de conexión. Mostrando datos de ejemplo.",
        };

        f.write_str(message)
    }
}

const SAMPLES_BANNER: &str = "Mostrando datos de ejemplo";

/// The adoption page: what is on screen and how it got there.
///
/// Every action takes `&mut self`, so a second action cannot start until the
/// first has settled and results always land in the order they were asked for.
pub struct Listing<S, H> {
    source: S,
    host: H,
    samples: Cow<'static, [Animal]>,
    animals: Vec<Animal>,
    phase: Phase,
    advisory: Option<Advisory>,
}

impl<S: AnimalSource, H: Host> Listing<S, H> {
    pub fn new(source: S, host: H) -> Self {
        Self::with_samples(source, host, samples::fallback())
    }

    pub fn with_samples(source: S, host: H, samples: impl Into<Cow<'static, [Animal]>>) -> Self {
        Self {
            source,
            host,
            samples: samples.into(),
            animals: Vec::new(),
            phase: Phase::Loading,
            advisory: None,
        }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory
    }

    /// Line to show above the animals. Samples are always flagged, even when
    /// no advisory explains why.
    pub fn banner(&self) -> Option<String> {
        match (self.advisory, self.phase) {
            (Some(advisory), _) => Some(advisory.to_string()),
            (None, Phase::Fallback) => Some(SAMPLES_BANNER.to_string()),
            (None, _) => None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub async fn load(&mut self) {
        self.begin();

        match self.source.fetch_available().await {
            Ok(animals) if !animals.is_empty() => {
                info!("Loaded {} animals from the API", animals.len());
                self.settle(Phase::Live, animals, None);
            }
            Ok(_) => {
                warn!("No animals on the server, showing samples");
                let samples = self.samples.to_vec();
                self.settle(Phase::Fallback, samples, Some(Advisory::NoLiveRecords));
            }
            Err(e) => {
                warn!("Error connecting to the API: {e}");
                let samples = self.samples.to_vec();
                self.settle(Phase::Fallback, samples, Some(Advisory::ConnectionFailure));
            }
        }
    }

    pub async fn filter_by_category(&mut self, tipo: &str) {
        self.begin();

        match self.source.search(&SearchCriteria::category(tipo)).await {
            Ok(animals) if !animals.is_empty() => {
                info!("{} animals of type {tipo}", animals.len());
                self.settle(Phase::Live, animals, None);
            }
            Ok(_) => {
                info!("No animals of type {tipo} on the server, filtering samples");
                let local = samples::of_category(&self.samples, tipo);
                self.settle(Phase::Fallback, local, None);
            }
            Err(e) => {
                warn!("Error filtering by type {tipo}: {e}");
                let local = samples::of_category(&self.samples, tipo);
                self.settle(Phase::Fallback, local, Some(Advisory::FilterFailure));
            }
        }
    }

    pub async fn filter_urgent(&mut self) {
        self.begin();

        let advisory = match self.source.fetch_available().await {
            Ok(animals) => {
                let urgent = samples::urgent(&animals);
                if !urgent.is_empty() {
                    info!("{} urgent animals", urgent.len());
                    self.settle(Phase::Live, urgent, None);
                    return;
                }
                Advisory::UrgentSamples
            }
            Err(e) => {
                warn!("Error looking up urgent animals: {e}");
                Advisory::UrgentConnectionFailure
            }
        };

        let local = samples::urgent(&self.samples);
        if local.is_empty() {
            self.host.notify(&Notice::NothingUrgent);
            self.load().await;
            return;
        }

        self.settle(Phase::Fallback, local, Some(advisory));
    }

    pub async fn share(&self, animal: &Animal) -> ShareOutcome {
        share_animal(&self.host, animal).await
    }

    pub fn view_details(&self, animal: &Animal) {
        info!("Viewing details of {}", animal.nombre);
        self.host.notify(&Notice::DetailsComingSoon {
            nombre: animal.nombre.clone(),
        });
    }

    fn begin(&mut self) {
        self.phase = Phase::Loading;
        self.advisory = None;
    }

    fn settle(&mut self, phase: Phase, animals: Vec<Animal>, advisory: Option<Advisory>) {
        self.animals = animals;
        self.phase = phase;
        self.advisory = advisory;
    }
}
