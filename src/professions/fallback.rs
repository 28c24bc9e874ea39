use crate::professions::models::Profession;

/// Served whenever the upstream professions API is unreachable, errors out,
/// or returns an empty list.
pub fn fallback_professions() -> Vec<Profession> {
    [
        ("1", "Plomero"),
        ("2", "Electricista"),
        ("3", "Médico"),
        ("4", "Abogado"),
        ("5", "Profesor"),
        ("6", "Diseñador"),
        ("7", "Desarrollador"),
        ("8", "Contador"),
        ("9", "Arquitecto"),
        ("10", "Técnico en refrigeración"),
    ]
    .into_iter()
    .map(|(id, name)| Profession {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}
