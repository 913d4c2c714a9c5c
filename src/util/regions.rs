//! Static region and comuna catalog for the profile form.
//!
//! Mirrors the shape the backend stores: a region name keyed to its comuna
//! names. The comuna select stays disabled until a region is chosen.

#[cfg(test)]
#[path = "regions_test.rs"]
mod regions_test;

/// Chilean regions north to south, each with its main comunas.
pub const REGIONS: &[(&str, &[&str])] = &[
    ("Arica y Parinacota", &["Arica", "Camarones", "Putre", "General Lagos"]),
    ("Tarapacá", &["Iquique", "Alto Hospicio", "Pozo Almonte", "Pica"]),
    ("Antofagasta", &["Antofagasta", "Calama", "Tocopilla", "Mejillones", "Taltal"]),
    ("Atacama", &["Copiapó", "Caldera", "Vallenar", "Chañaral", "Tierra Amarilla"]),
    ("Coquimbo", &["La Serena", "Coquimbo", "Ovalle", "Illapel", "Vicuña"]),
    (
        "Valparaíso",
        &[
            "Valparaíso",
            "Viña del Mar",
            "Quilpué",
            "Villa Alemana",
            "San Antonio",
            "Quillota",
            "Los Andes",
        ],
    ),
    (
        "Metropolitana de Santiago",
        &[
            "Santiago",
            "Providencia",
            "Las Condes",
            "Ñuñoa",
            "La Florida",
            "Maipú",
            "Puente Alto",
            "San Bernardo",
            "La Reina",
            "Macul",
            "San Joaquín",
            "Estación Central",
            "Recoleta",
            "Independencia",
            "Vitacura",
            "Lo Barnechea",
            "Peñalolén",
            "La Cisterna",
            "San Miguel",
            "Quilicura",
        ],
    ),
    (
        "Libertador General Bernardo O'Higgins",
        &["Rancagua", "Machalí", "San Fernando", "Rengo", "Santa Cruz"],
    ),
    ("Maule", &["Talca", "Curicó", "Linares", "Constitución", "Cauquenes"]),
    ("Ñuble", &["Chillán", "Chillán Viejo", "San Carlos", "Bulnes", "Quirihue"]),
    (
        "Biobío",
        &[
            "Concepción",
            "Talcahuano",
            "San Pedro de la Paz",
            "Hualpén",
            "Chiguayante",
            "Los Ángeles",
            "Coronel",
        ],
    ),
    ("La Araucanía", &["Temuco", "Padre Las Casas", "Villarrica", "Angol", "Pucón"]),
    ("Los Ríos", &["Valdivia", "La Unión", "Panguipulli", "Río Bueno"]),
    ("Los Lagos", &["Puerto Montt", "Osorno", "Castro", "Ancud", "Puerto Varas"]),
    ("Aysén del General Carlos Ibáñez del Campo", &["Coyhaique", "Puerto Aysén", "Chile Chico"]),
    (
        "Magallanes y de la Antártica Chilena",
        &["Punta Arenas", "Puerto Natales", "Porvenir", "Cabo de Hornos"],
    ),
];

/// Region names in catalog order.
pub fn region_names() -> Vec<&'static str> {
    REGIONS.iter().map(|(name, _)| *name).collect()
}

/// Comunas for a region; empty when the region is unknown.
pub fn comunas_for(region: &str) -> &'static [&'static str] {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map_or(&[], |(_, comunas)| comunas)
}
