//! Place heading normalization.
//!
//! Converts the accession list's city, state, and country fields into a
//! Library of Congress style heading, e.g. `Los Angeles (Calif.)`.

/// State and province codes used in the accession lists, with the heading
/// form of each. Sorted by code.
static STATE_HEADINGS: [(&str, &str); 55] = [
    ("AK", "Alaska"),
    ("AL", "Ala."),
    ("AR", "Ark."),
    ("AZ", "Ariz."),
    ("CA", "Calif."),
    ("CO", "Colo."),
    ("CT", "Conn."),
    ("DC", "D.C."),
    ("DE", "Del."),
    ("FL", "Fla."),
    ("GA", "Ga."),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Ill."),
    ("IN", "Ind."),
    ("KS", "Kan."),
    ("KY", "Ky."),
    ("LA", "La."),
    ("MA", "Mass."),
    ("MD", "Md."),
    ("ME", "Me."),
    ("MI", "Mich."),
    ("MN", "Minn."),
    ("MO", "Mo."),
    ("MS", "Miss."),
    ("MT", "Mont."),
    ("NC", "N.C."),
    ("ND", "N.D."),
    ("NE", "Neb."),
    ("NH", "N.H."),
    ("NJ", "N.J."),
    ("NM", "N.M."),
    ("NSW", "N.S.W."),
    ("NV", "Nev."),
    ("NY", "N.Y."),
    ("OH", "Ohio"),
    ("OK", "Okla."),
    ("ON", "Ont."),
    ("OR", "Or."),
    ("PA", "Pa."),
    ("QC", "Québec"),
    ("RI", "R.I."),
    ("SC", "S.C."),
    ("SD", "S.D."),
    ("TN", "Tenn."),
    ("TX", "Tex."),
    ("UT", "Utah"),
    ("VA", "Va."),
    ("VIC", "Vic."),
    ("VT", "Vt."),
    ("WA", "Wash."),
    ("WI", "Wis."),
    ("WV", "W. Va."),
    ("WY", "Wyo."),
];

/// Heading form of a state or province code. Codes match exactly.
pub fn state_heading(code: &str) -> Option<&'static str> {
    STATE_HEADINGS
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|idx| STATE_HEADINGS[idx].1)
}

/// Normalizes a city/state/country triple into a single place heading.
///
/// With a city and a known state code the result is `City (Heading)`.
/// Otherwise the non-empty parts are joined with `", "`, and a bare `USA`
/// becomes `United States`. All-empty input yields an empty string.
pub fn place_normalize(city: &str, state: &str, country: &str) -> String {
    if !city.is_empty() && !state.is_empty() {
        if let Some(heading) = state_heading(state) {
            return format!("{city} ({heading})");
        }
    }

    let joined = [city, state, country]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if joined == "USA" {
        "United States".to_string()
    } else {
        joined
    }
}
