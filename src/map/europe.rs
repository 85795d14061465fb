//! The standard map of Europe.

use crate::map::{ConnectionData, MapData, PlaceData, PlaceKind, Transport, DEFAULT_RAIL_CYCLE};

use PlaceKind::{Land, Sea};

/// Abbreviation, name and kind of every place, in id order.
const PLACES: &[(&str, &str, PlaceKind)] = &[
    ("AS", "Adriatic Sea", Sea),
    ("AL", "Alicante", Land),
    ("AM", "Amsterdam", Land),
    ("AT", "Athens", Land),
    ("AO", "Atlantic Ocean", Sea),
    ("BA", "Barcelona", Land),
    ("BI", "Bari", Land),
    ("BB", "Bay of Biscay", Sea),
    ("BE", "Belgrade", Land),
    ("BR", "Berlin", Land),
    ("BS", "Black Sea", Sea),
    ("BO", "Bordeaux", Land),
    ("BU", "Brussels", Land),
    ("BC", "Bucharest", Land),
    ("BD", "Budapest", Land),
    ("CA", "Cadiz", Land),
    ("CG", "Cagliari", Land),
    ("CD", "Castle Dracula", Land),
    ("CF", "Clermont-Ferrand", Land),
    ("CO", "Cologne", Land),
    ("CN", "Constanta", Land),
    ("DU", "Dublin", Land),
    ("ED", "Edinburgh", Land),
    ("EC", "English Channel", Sea),
    ("FL", "Florence", Land),
    ("FR", "Frankfurt", Land),
    ("GA", "Galatz", Land),
    ("GW", "Galway", Land),
    ("GE", "Geneva", Land),
    ("GO", "Genoa", Land),
    ("GR", "Granada", Land),
    ("HA", "Hamburg", Land),
    ("IO", "Ionian Sea", Sea),
    ("IR", "Irish Sea", Sea),
    ("KL", "Klausenburg", Land),
    ("LE", "Le Havre", Land),
    ("LI", "Leipzig", Land),
    ("LS", "Lisbon", Land),
    ("LV", "Liverpool", Land),
    ("LO", "London", Land),
    ("MA", "Madrid", Land),
    ("MN", "Manchester", Land),
    ("MR", "Marseilles", Land),
    ("MS", "Mediterranean Sea", Sea),
    ("MI", "Milan", Land),
    ("MU", "Munich", Land),
    ("NA", "Nantes", Land),
    ("NP", "Naples", Land),
    ("NS", "North Sea", Sea),
    ("NU", "Nuremburg", Land),
    ("PA", "Paris", Land),
    ("PL", "Plymouth", Land),
    ("PR", "Prague", Land),
    ("RO", "Rome", Land),
    ("SA", "Salonica", Land),
    ("SN", "Santander", Land),
    ("SR", "Saragossa", Land),
    ("SJ", "Sarajevo", Land),
    ("SO", "Sofia", Land),
    ("JM", "St Joseph and St Mary", Land),
    ("ST", "Strasbourg", Land),
    ("SW", "Swansea", Land),
    ("SZ", "Szeged", Land),
    ("TO", "Toulouse", Land),
    ("TS", "Tyrrhenian Sea", Sea),
    ("VA", "Valona", Land),
    ("VR", "Varna", Land),
    ("VE", "Venice", Land),
    ("VI", "Vienna", Land),
    ("ZA", "Zagreb", Land),
    ("ZU", "Zurich", Land),
];

#[rustfmt::skip]
const ROADS: &[(&str, &str)] = &[
    ("AL", "GR"), ("AL", "MA"), ("AL", "SR"),
    ("AM", "BU"), ("AM", "CO"),
    ("AT", "VA"),
    ("BA", "SR"), ("BA", "TO"),
    ("BI", "NP"), ("BI", "RO"),
    ("BE", "BC"), ("BE", "KL"), ("BE", "SJ"), ("BE", "SO"), ("BE", "JM"), ("BE", "SZ"),
    ("BR", "HA"), ("BR", "LI"), ("BR", "PR"),
    ("BO", "CF"), ("BO", "NA"), ("BO", "SR"), ("BO", "TO"),
    ("BU", "CO"), ("BU", "LE"), ("BU", "PA"), ("BU", "ST"),
    ("BC", "CN"), ("BC", "GA"), ("BC", "KL"), ("BC", "SO"),
    ("BD", "KL"), ("BD", "SZ"), ("BD", "VI"), ("BD", "ZA"),
    ("CA", "GR"), ("CA", "LS"), ("CA", "MA"),
    ("CD", "GA"), ("CD", "KL"),
    ("CF", "GE"), ("CF", "MR"), ("CF", "NA"), ("CF", "PA"), ("CF", "TO"),
    ("CO", "FR"), ("CO", "HA"), ("CO", "LI"), ("CO", "ST"),
    ("CN", "GA"), ("CN", "VR"),
    ("DU", "GW"),
    ("ED", "MN"),
    ("FL", "GO"), ("FL", "RO"), ("FL", "VE"),
    ("FR", "LI"), ("FR", "NU"), ("FR", "ST"),
    ("GA", "KL"),
    ("GE", "MR"), ("GE", "PA"), ("GE", "ST"), ("GE", "ZU"),
    ("GO", "MR"), ("GO", "MI"), ("GO", "VE"),
    ("GR", "MA"),
    ("HA", "LI"),
    ("KL", "SZ"),
    ("LI", "NU"),
    ("LE", "NA"), ("LE", "PA"),
    ("LS", "MA"), ("LS", "SN"),
    ("LV", "MN"), ("LV", "SW"),
    ("LO", "MN"), ("LO", "PL"), ("LO", "SW"),
    ("MA", "SN"), ("MA", "SR"),
    ("MR", "MI"), ("MR", "TO"), ("MR", "ZU"),
    ("MI", "MU"), ("MI", "VE"), ("MI", "ZU"),
    ("MU", "NU"), ("MU", "ST"), ("MU", "VE"), ("MU", "VI"), ("MU", "ZA"), ("MU", "ZU"),
    ("NA", "PA"),
    ("NP", "RO"),
    ("NU", "PR"), ("NU", "ST"),
    ("PA", "ST"),
    ("PR", "VI"),
    ("SA", "SO"), ("SA", "VA"),
    ("SN", "SR"),
    ("SR", "TO"),
    ("SJ", "SO"), ("SJ", "JM"), ("SJ", "VA"), ("SJ", "ZA"),
    ("SO", "VA"), ("SO", "VR"),
    ("ST", "ZU"),
    ("JM", "SZ"), ("JM", "ZA"),
    ("SZ", "ZA"),
    ("VI", "ZA"),
];

#[rustfmt::skip]
const RAILS: &[(&str, &str)] = &[
    ("AL", "BA"), ("AL", "MA"),
    ("BA", "SR"),
    ("BI", "NP"),
    ("BE", "SO"), ("BE", "SZ"),
    ("BR", "HA"), ("BR", "LI"), ("BR", "PR"),
    ("BO", "PA"), ("BO", "SR"),
    ("BU", "CO"), ("BU", "PA"),
    ("BC", "CN"), ("BC", "GA"), ("BC", "SZ"),
    ("BD", "SZ"), ("BD", "VI"),
    ("CO", "FR"),
    ("ED", "MN"),
    ("FL", "MI"), ("FL", "RO"),
    ("FR", "LI"), ("FR", "ST"),
    ("GE", "MI"),
    ("GO", "MI"),
    ("LI", "NU"),
    ("LE", "PA"),
    ("LS", "MA"),
    ("LV", "MN"),
    ("LO", "MN"), ("LO", "SW"),
    ("MA", "SN"), ("MA", "SR"),
    ("MR", "PA"),
    ("MI", "ZU"),
    ("MU", "NU"),
    ("NP", "RO"),
    ("PR", "VI"),
    ("SA", "SO"),
    ("SO", "VR"),
    ("ST", "ZU"),
    ("VE", "VI"),
];

#[rustfmt::skip]
const BOATS: &[(&str, &str)] = &[
    ("AS", "BI"), ("AS", "IO"), ("AS", "VE"),
    ("AL", "MS"),
    ("AM", "NS"),
    ("AT", "IO"),
    ("AO", "BB"), ("AO", "CA"), ("AO", "EC"), ("AO", "GW"),
    ("AO", "IR"), ("AO", "LS"), ("AO", "MS"), ("AO", "NS"),
    ("BA", "MS"),
    ("BB", "BO"), ("BB", "NA"), ("BB", "SN"),
    ("BS", "CN"), ("BS", "IO"), ("BS", "VR"),
    ("CG", "MS"), ("CG", "TS"),
    ("DU", "IR"),
    ("ED", "NS"),
    ("EC", "LE"), ("EC", "LO"), ("EC", "NS"), ("EC", "PL"),
    ("GO", "TS"),
    ("HA", "NS"),
    ("IO", "SA"), ("IO", "TS"), ("IO", "VA"),
    ("IR", "LV"), ("IR", "SW"),
    ("MR", "MS"),
    ("MS", "TS"),
    ("NP", "TS"),
    ("RO", "TS"),
];

/// Raw data for the standard map.
pub(super) fn europe_data() -> MapData {
    let places = PLACES
        .iter()
        .map(|&(abbrev, name, kind)| PlaceData {
            abbrev: abbrev.to_string(),
            name: name.to_string(),
            kind,
        })
        .collect();

    let tagged = |edges: &'static [(&'static str, &'static str)], transport: Transport| {
        edges.iter().map(move |&(from, to)| ConnectionData {
            from: from.to_string(),
            to: to.to_string(),
            transport,
        })
    };

    let connections = tagged(ROADS, Transport::Road)
        .chain(tagged(RAILS, Transport::Rail))
        .chain(tagged(BOATS, Transport::Boat))
        .collect();

    MapData {
        places,
        connections,
        hospital: "JM".to_string(),
        castle: "CD".to_string(),
        rail_cycle: DEFAULT_RAIL_CYCLE,
    }
}
