use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub profession: String,
    pub ranking: f64,
    pub city: String,
    pub province: String,
}

/// Demo professionals shown on the landing page map. Real profiles live
/// behind the main product API, which the landing page never queries.
pub fn demo_roster() -> Vec<Professional> {
    [
        ("1", "Marcos", "Giménez", "Plomero", 4.9, "Palermo"),
        ("2", "Lucía", "Fernández", "Electricista", 4.8, "Recoleta"),
        ("3", "Javier", "Sosa", "Desarrollador", 4.7, "Belgrano"),
        ("4", "Carla", "Domínguez", "Abogada", 4.9, "San Telmo"),
        ("5", "Ramiro", "Acosta", "Contador", 4.6, "Caballito"),
        ("6", "Sofía", "Pereyra", "Arquitecta", 4.8, "Núñez"),
        ("7", "Diego", "Molina", "Profesor", 4.5, "Almagro"),
        ("8", "Valentina", "Ríos", "Diseñadora", 4.7, "Villa Crespo"),
    ]
    .into_iter()
    .map(
        |(id, first_name, last_name, profession, ranking, city)| Professional {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            profession: profession.to_string(),
            ranking,
            city: city.to_string(),
            province: String::from("Buenos Aires"),
        },
    )
    .collect()
}
