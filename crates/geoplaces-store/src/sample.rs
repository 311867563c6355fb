//! Demo data set: north-eastern Brazilian states, cities and points of interest.

use crate::ports::{MunicipalityStore, PlaceStore};
use geoplaces_core::error::Result;
use geoplaces_core::models::{NewCity, NewPlace};

/// (name, UF)
pub const STATES: &[(&str, &str)] = &[
    ("Paraíba", "PB"),
    ("Pernambuco", "PE"),
    ("Ceará", "CE"),
    ("Rio Grande do Norte", "RN"),
    ("Alagoas", "AL"),
    ("Sergipe", "SE"),
    ("Bahia", "BA"),
    ("Maranhão", "MA"),
    ("Piauí", "PI"),
];

/// (name, UF, population, area in km²)
pub const CITIES: &[(&str, &str, u64, f64)] = &[
    ("João Pessoa", "PB", 825_796, 211.475),
    ("Campina Grande", "PB", 413_830, 620.223),
    ("Recife", "PE", 1_653_461, 218.435),
    ("Olinda", "PE", 393_115, 41.681),
    ("Fortaleza", "CE", 2_703_391, 312.353),
    ("Natal", "RN", 890_480, 167.264),
    ("Maceió", "AL", 1_025_360, 511.149),
    ("Aracaju", "SE", 664_908, 181.857),
    ("Salvador", "BA", 2_886_698, 693.453),
    ("São Luís", "MA", 1_115_932, 834.785),
];

/// The sample points of interest
pub fn sample_places() -> Vec<NewPlace> {
    [
        (
            "Praça da Independência",
            "João Pessoa",
            -7.11532,
            -34.861,
            "Ponto turístico central da cidade.",
            "Praça",
            "Centro, João Pessoa - PB",
        ),
        (
            "Estação Cabo Branco",
            "João Pessoa",
            -7.14111,
            -34.7947,
            "Ponto mais oriental das Américas.",
            "Ponto Turístico",
            "Cabo Branco, João Pessoa - PB",
        ),
        (
            "Mercado Central",
            "João Pessoa",
            -7.12056,
            -34.8819,
            "Mercado tradicional com artesanato local.",
            "Comércio",
            "Centro, João Pessoa - PB",
        ),
        (
            "Praça do Marco Zero",
            "Recife",
            -8.04756,
            -34.8770,
            "Marco zero de Recife, centro histórico.",
            "Ponto Turístico",
            "Recife Antigo, Recife - PE",
        ),
        (
            "Mercado de São José",
            "Recife",
            -8.06278,
            -34.8806,
            "Mercado público tradicional de Recife.",
            "Comércio",
            "São José, Recife - PE",
        ),
        (
            "Praia de Boa Viagem",
            "Recife",
            -8.11944,
            -34.9006,
            "Principal praia urbana de Recife.",
            "Praia",
            "Boa Viagem, Recife - PE",
        ),
        (
            "Centro Dragão do Mar",
            "Fortaleza",
            -3.73111,
            -38.5264,
            "Centro cultural e de arte de Fortaleza.",
            "Cultura",
            "Praia de Iracema, Fortaleza - CE",
        ),
        (
            "Mercado Central de Fortaleza",
            "Fortaleza",
            -3.73111,
            -38.5264,
            "Mercado tradicional com artesanato cearense.",
            "Comércio",
            "Centro, Fortaleza - CE",
        ),
    ]
    .into_iter()
    .map(|(name, city, latitude, longitude, description, category, address)| NewPlace {
        name: name.to_string(),
        city: city.to_string(),
        latitude,
        longitude,
        description: description.to_string(),
        category: category.to_string(),
        address: address.to_string(),
    })
    .collect()
}

/// Load the sample places into a place store
pub async fn seed_places<S: PlaceStore + ?Sized>(store: &S) -> Result<usize> {
    let places = sample_places();
    let count = places.len();

    for place in places {
        store.insert_place(place).await?;
    }

    tracing::info!(count, "Seeded sample places");
    Ok(count)
}

/// Load the sample states and cities into a municipality store
pub async fn seed_municipalities<S: MunicipalityStore + ?Sized>(store: &S) -> Result<usize> {
    for (name, uf) in STATES {
        store.insert_state(name, uf).await?;
    }

    for (name, uf, population, area) in CITIES {
        store
            .insert_city(NewCity::new(*name, *uf).with_population(*population).with_area(*area))
            .await?;
    }

    tracing::info!(states = STATES.len(), cities = CITIES.len(), "Seeded sample municipalities");
    Ok(CITIES.len())
}
