use std::sync::LazyLock;

use shelter::{AdoptionState, Animal};

const SAMPLE_PHOTO: &str = "/mix/perro_ejem.jpg";

static SAMPLES: LazyLock<Vec<Animal>> = LazyLock::new(|| {
    vec![
        Animal {
            descripcion: "Perro muy cariñoso y juguetón".to_string(),
            ..sample(1, "Paco", "Labrador", 5, "grande", "macho", false)
        },
        Animal {
            descripcion: "Necesita familia urgente".to_string(),
            ..sample(2, "Negu", "Pug", 2, "pequeño", "hembra", true)
        },
        Animal {
            descripcion: "Muy obediente y leal".to_string(),
            ..sample(3, "Luna", "Pastor Alemán", 3, "grande", "hembra", false)
        },
    ]
});

/// Built-in animals shown whenever the API has nothing to offer.
pub fn fallback() -> &'static [Animal] {
    &SAMPLES
}

pub fn of_category(samples: &[Animal], tipo: &str) -> Vec<Animal> {
    samples
        .iter()
        .filter(|animal| animal.matches_category(tipo))
        .cloned()
        .collect()
}

pub fn urgent(animals: &[Animal]) -> Vec<Animal> {
    animals.iter().filter(|animal| animal.urgente).cloned().collect()
}

fn sample(
    id: u64,
    nombre: &str,
    raza: &str,
    edad: u32,
    tamano: &str,
    sexo: &str,
    urgente: bool,
) -> Animal {
    Animal {
        id,
        nombre: nombre.to_string(),
        tipo_animal: "perro".to_string(),
        raza: raza.to_string(),
        edad,
        tamano: tamano.to_string(),
        sexo: sexo.to_string(),
        descripcion: String::new(),
        estado_adopcion: AdoptionState::Disponible,
        foto_principal: SAMPLE_PHOTO.to_string(),
        esterilizado: true,
        vacunado: true,
        chip: true,
        urgente,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_fallback_set() {
        let names: Vec<&str> = fallback().iter().map(|a| a.nombre.as_str()).collect();
        assert_eq!(names, vec!["Paco", "Negu", "Luna"]);

        let ids: HashSet<u64> = fallback().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), fallback().len());
    }

    #[test]
    fn test_of_category() {
        assert_eq!(of_category(fallback(), "Perro").len(), 3);
        assert!(of_category(fallback(), "gato").is_empty());
    }

    #[test]
    fn test_urgent() {
        let urgent = urgent(fallback());
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].nombre, "Negu");
    }
}
