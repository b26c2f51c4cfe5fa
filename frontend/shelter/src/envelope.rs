//! # Response envelopes
//!
//! The backend has wrapped collections three different ways over time:
//! - a bare JSON array
//! - `{ "results": [...] }` when DRF pagination is switched on
//! - `{ "data": [...] }` from the older nested responses
//!
//! Anything else is unrecognized and reads as an empty collection.
use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Animal, normalize_animal};

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Bare(Vec<Value>),
    Paginated(Vec<Value>),
    Nested(Vec<Value>),
    Unrecognized(Value),
}

impl Envelope {
    pub fn inspect(payload: Value) -> Self {
        match payload {
            Value::Array(items) => Envelope::Bare(items),
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.remove("results") {
                    return Envelope::Paginated(items);
                }
                if let Some(Value::Array(items)) = map.remove("data") {
                    return Envelope::Nested(items);
                }
                Envelope::Unrecognized(Value::Object(map))
            }
            other => Envelope::Unrecognized(other),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Envelope::Bare(items) | Envelope::Paginated(items) | Envelope::Nested(items) => items,
            Envelope::Unrecognized(payload) => {
                warn!("Unrecognized response shape: {payload}");
                Vec::new()
            }
        }
    }
}

/// Unwraps the envelope and normalizes every animal in it. Elements that are
/// not animals and repeated ids are dropped.
pub fn animals_from(payload: Value) -> Vec<Animal> {
    let mut seen = HashSet::new();
    let mut animals = Vec::new();

    for item in Envelope::inspect(payload).into_items() {
        let animal = match normalize_animal(item) {
            Ok(animal) => animal,
            Err(e) => {
                warn!("Skipping malformed animal: {e}");
                continue;
            }
        };

        if !seen.insert(animal.id) {
            warn!("Skipping duplicate animal id {}", animal.id);
            continue;
        }

        animals.push(animal);
    }

    debug!("Normalized {} animals", animals.len());
    animals
}

/// Unwraps the envelope and decodes each element as is.
pub fn records_from<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    Envelope::inspect(payload)
        .into_items()
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value(item)
                .map_err(|e| warn!("Skipping malformed record: {e}"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use serde_json::json;
    use tracing_subscriber::{fmt, fmt::MakeWriter};

    use super::*;
    use crate::models::Evento;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn logs(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let subscriber = fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, captured.logs())
    }

    fn paco() -> Value {
        json!({ "id": 1, "nombre": "Paco", "tipo_animal": "perro", "tamaño": "grande" })
    }

    #[test]
    fn test_bare() {
        let envelope = Envelope::inspect(json!([paco()]));
        assert_eq!(envelope, Envelope::Bare(vec![paco()]));
    }

    #[test]
    fn test_paginated() {
        let payload = json!({ "count": 1, "next": null, "results": [paco()] });
        assert_eq!(Envelope::inspect(payload), Envelope::Paginated(vec![paco()]));
    }

    #[test]
    fn test_nested() {
        let payload = json!({ "data": [paco()] });
        assert_eq!(Envelope::inspect(payload), Envelope::Nested(vec![paco()]));
    }

    #[test]
    fn test_results_wins_over_data() {
        let payload = json!({ "results": [paco()], "data": [] });
        assert_eq!(Envelope::inspect(payload), Envelope::Paginated(vec![paco()]));
    }

    #[test]
    fn test_results_not_array_falls_to_data() {
        let payload = json!({ "results": "nope", "data": [paco()] });
        assert_eq!(Envelope::inspect(payload), Envelope::Nested(vec![paco()]));
    }

    #[test]
    fn test_unrecognized() {
        let payload = json!({ "detail": "Not found." });
        let envelope = Envelope::inspect(payload);
        assert!(matches!(envelope, Envelope::Unrecognized(_)));
        assert!(envelope.into_items().is_empty());

        assert!(Envelope::inspect(json!(null)).into_items().is_empty());
        assert!(Envelope::inspect(json!("animales")).into_items().is_empty());
    }

    #[test]
    fn test_unrecognized_logs_warning() {
        let (animals, logs) = with_logs(|| animals_from(json!({ "detail": "Not found." })));

        assert!(animals.is_empty());
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("Unrecognized response shape"), "{logs}");
    }

    #[test]
    fn test_recognized_no_warning() {
        let (animals, logs) = with_logs(|| animals_from(json!({ "results": [paco()] })));

        assert_eq!(animals.len(), 1);
        assert!(!logs.contains("WARN"), "{logs}");
    }

    #[test]
    fn test_animals_normalized() {
        let animals = animals_from(json!({ "data": [paco()] }));
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].nombre, "Paco");
        assert_eq!(animals[0].tamano, "grande");
    }

    #[test]
    fn test_animals_skip_malformed_and_duplicates() {
        let payload = json!([
            paco(),
            { "nombre": "sin id" },
            { "id": 1, "nombre": "Paco otra vez" },
            { "id": 2, "nombre": "Negu" },
        ]);

        let animals = animals_from(payload);
        let names: Vec<&str> = animals.iter().map(|a| a.nombre.as_str()).collect();
        assert_eq!(names, vec!["Paco", "Negu"]);
    }

    #[test]
    fn test_records_passthrough() {
        let payload = json!([{
            "id": 4,
            "tipo_evento": "adopcion",
            "fecha_evento": "2025-06-14",
            "lugar_evento": "Plaza Nueva",
            "hora_inicio": "10:00:00",
            "hora_fin": "13:30:00",
        }]);

        let events: Vec<Evento> = records_from(payload);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].lugar_evento, "Plaza Nueva");
        assert_eq!(events[0].hora_fin.to_string(), "13:30:00");
    }

    #[test]
    fn test_records_skip_undecodable_event() {
        let payload = json!({ "data": [
            {
                "id": 1,
                "tipo_evento": "charla",
                "fecha_evento": "10/05/2025",
                "lugar_evento": "Biblioteca",
                "hora_inicio": "18:00:00",
                "hora_fin": "19:30:00",
            },
            {
                "id": 2,
                "tipo_evento": "recaudacion",
                "fecha_evento": "2025-05-17",
                "lugar_evento": "Frontón",
                "hora_inicio": "11:00",
                "hora_fin": "14:00",
            },
        ]});

        let (events, logs): (Vec<Evento>, String) = with_logs(|| records_from(payload));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 2);
        assert!(logs.contains("Skipping malformed record"), "{logs}");
    }
}
