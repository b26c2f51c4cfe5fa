use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionState {
    #[default]
    Disponible,
    Reservado,
    Adoptado,
    EnTratamiento,
    #[serde(other)]
    Unknown,
}

impl AdoptionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionState::Disponible => "disponible",
            AdoptionState::Reservado => "reservado",
            AdoptionState::Adoptado => "adoptado",
            AdoptionState::EnTratamiento => "en_tratamiento",
            AdoptionState::Unknown => "unknown",
        }
    }
}

impl From<&str> for AdoptionState {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "disponible" => AdoptionState::Disponible,
            "reservado" => AdoptionState::Reservado,
            "adoptado" => AdoptionState::Adoptado,
            "en_tratamiento" => AdoptionState::EnTratamiento,
            _ => AdoptionState::Unknown,
        }
    }
}

/// Canonical animal record, as every caller of this crate sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: u64,
    pub nombre: String,
    pub tipo_animal: String,
    pub raza: String,
    pub edad: u32,
    pub tamano: String,
    pub sexo: String,
    pub descripcion: String,
    pub estado_adopcion: AdoptionState,
    pub foto_principal: String,
    pub esterilizado: bool,
    pub vacunado: bool,
    pub chip: bool,
    pub urgente: bool,
}

impl Animal {
    pub fn matches_category(&self, tipo: &str) -> bool {
        self.tipo_animal.to_lowercase() == tipo.to_lowercase()
    }
}

/// Animal as the backend may send it. The backend spells size `tamaño` and
/// adoption state `estado`, older payloads use the canonical names, and list
/// views omit most descriptive fields.
#[derive(Deserialize)]
struct WireAnimal {
    id: u64,
    #[serde(default, deserialize_with = "nullable")]
    nombre: String,
    #[serde(default, deserialize_with = "nullable")]
    tipo_animal: String,
    #[serde(default, deserialize_with = "nullable")]
    raza: String,
    #[serde(default, deserialize_with = "nullable")]
    edad: u32,
    #[serde(rename = "tamaño", default, deserialize_with = "nullable")]
    tamano_accented: String,
    #[serde(default, deserialize_with = "nullable")]
    tamano: String,
    #[serde(default, deserialize_with = "nullable")]
    sexo: String,
    #[serde(default, deserialize_with = "nullable")]
    descripcion: String,
    #[serde(default, deserialize_with = "nullable")]
    estado: String,
    #[serde(default, deserialize_with = "nullable")]
    estado_adopcion: String,
    #[serde(default, deserialize_with = "nullable")]
    foto_principal: String,
    #[serde(default, deserialize_with = "nullable")]
    esterilizado: bool,
    #[serde(default, deserialize_with = "nullable")]
    vacunado: bool,
    #[serde(default, deserialize_with = "nullable")]
    chip: bool,
    #[serde(default, deserialize_with = "nullable")]
    urgente: bool,
}

impl From<WireAnimal> for Animal {
    fn from(wire: WireAnimal) -> Self {
        let tamano = first_present(wire.tamano_accented, wire.tamano);
        let estado = first_present(wire.estado, wire.estado_adopcion);

        Animal {
            id: wire.id,
            nombre: wire.nombre,
            tipo_animal: wire.tipo_animal,
            raza: wire.raza,
            edad: wire.edad,
            tamano,
            sexo: wire.sexo,
            descripcion: wire.descripcion,
            estado_adopcion: AdoptionState::from(estado.as_str()),
            foto_principal: wire.foto_principal,
            esterilizado: wire.esterilizado,
            vacunado: wire.vacunado,
            chip: wire.chip,
            urgente: wire.urgente,
        }
    }
}

fn first_present(preferred: String, fallback: String) -> String {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn normalize_animal(value: Value) -> Result<Animal, serde_json::Error> {
    serde_json::from_value::<WireAnimal>(value).map(Animal::from)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evento {
    pub id: u64,
    pub tipo_evento: String,
    pub fecha_evento: NaiveDate,
    pub lugar_evento: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
}

/// Contact details of the shelter itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: u64,
    pub numero_telefono: String,
    pub correo_electronico: String,
    pub cuenta_corriente: String,
    pub direccion_teaming: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionRequest {
    pub animal_id: u64,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiencia: Option<String>,
    pub motivacion: String,
    pub otros_animales: bool,
    pub espacio_vivienda: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdoptionReceipt {
    pub mensaje: String,
    pub animal: String,
}

/// Sparse filters for `GET /animales/`. Unset fields and empty strings are
/// left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub tipo_animal: Option<String>,
    pub tamano: Option<String>,
    pub edad_min: Option<u32>,
    pub edad_max: Option<u32>,
    pub estado: Option<AdoptionState>,
    pub urgente: bool,
}

impl SearchCriteria {
    pub fn category(tipo: impl Into<String>) -> Self {
        Self {
            tipo_animal: Some(tipo.into()),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(tipo) = self.tipo_animal.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("tipo_animal", tipo.to_string()));
        }
        // the backend spells the size parameter with the accent
        if let Some(tamano) = self.tamano.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("tamaño", tamano.to_string()));
        }
        if let Some(min) = self.edad_min {
            pairs.push(("edad_min", min.to_string()));
        }
        if let Some(max) = self.edad_max {
            pairs.push(("edad_max", max.to_string()));
        }
        if let Some(estado) = self.estado {
            pairs.push(("estado", estado.as_str().to_string()));
        }
        if self.urgente {
            pairs.push(("urgente", "true".to_string()));
        }

        pairs
    }
}
