//! Wire format of the stations catalog and its normalization into
//! [`Station`] records.
//!
//! Only the consumed fields are declared; everything else in the payload is
//! ignored by serde. A missing consumed field is a decode error.

use serde::Deserialize;

use rrsync_core::types::Station;

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    result: CatalogResult,
}

#[derive(Debug, Deserialize)]
struct CatalogResult {
    stations: Vec<RawStation>,
}

#[derive(Debug, Deserialize)]
struct RawStation {
    stream_320: String,
    title: String,
    tooltip: String,
    icon_fill_colored: String,
    genre: Vec<RawGenre>,
    #[serde(rename = "shareUrl")]
    share_url: String,
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    name: String,
}

impl From<RawStation> for Station {
    fn from(raw: RawStation) -> Self {
        Station {
            icon_url: strip_query(&raw.icon_fill_colored).to_owned(),
            genres: raw.genre.into_iter().map(|g| g.name).collect(),
            stream_url: raw.stream_320,
            title: raw.title,
            tooltip: raw.tooltip,
            share_url: raw.share_url,
        }
    }
}

/// Decode a catalog body into stations, in server order.
pub fn parse_catalog(body: &str) -> Result<Vec<Station>, SourceError> {
    let response: CatalogResponse = serde_json::from_str(body)?;
    Ok(response
        .result
        .stations
        .into_iter()
        .map(Station::from)
        .collect())
}

/// `url` without its query string.
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CATALOG: &str = r#"{
        "result": {
            "stations": [
                {
                    "id": 15016,
                    "prefix": "rr_main",
                    "title": "Record",
                    "tooltip": "Main channel",
                    "icon_fill_colored": "https://cdn.example/icons/record.svg?v=42",
                    "stream_320": "https://radio.example/rr_main_320",
                    "stream_128": "https://radio.example/rr_main_128",
                    "genre": [{"id": 1, "name": "Dance"}, {"id": 7, "name": "House"}],
                    "shareUrl": "https://example/station/rr_main"
                },
                {
                    "title": "Rock",
                    "tooltip": "",
                    "icon_fill_colored": "https://cdn.example/icons/rock.svg",
                    "stream_320": "https://radio.example/rock_320",
                    "genre": [],
                    "shareUrl": "https://example/station/rock"
                }
            ]
        },
        "status": "ok"
    }"#;

    #[rstest]
    #[case("https://cdn/icon.svg?v=1", "https://cdn/icon.svg")]
    #[case("https://cdn/icon.svg", "https://cdn/icon.svg")]
    #[case("https://cdn/icon.svg?a=1?b=2", "https://cdn/icon.svg")]
    #[case("", "")]
    fn strip_query_cases(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(strip_query(url), expected);
    }

    #[test]
    fn parses_stations_in_server_order() {
        let stations = parse_catalog(CATALOG).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].title, "Record");
        assert_eq!(stations[1].title, "Rock");
    }

    #[test]
    fn normalizes_icon_and_genres() {
        let stations = parse_catalog(CATALOG).unwrap();
        let record = &stations[0];
        assert_eq!(record.stream_url, "https://radio.example/rr_main_320");
        assert_eq!(record.icon_url, "https://cdn.example/icons/record.svg");
        assert_eq!(record.genres, vec!["Dance", "House"]);
        assert_eq!(record.share_url, "https://example/station/rr_main");
        assert!(stations[1].genres.is_empty());
    }

    #[test]
    fn missing_field_is_an_error() {
        let body = r#"{"result":{"stations":[{"title":"x"}]}}"#;
        assert!(matches!(parse_catalog(body), Err(SourceError::Json(_))));
    }

    #[test]
    fn missing_result_is_an_error() {
        assert!(parse_catalog(r#"{"stations":[]}"#).is_err());
    }

    #[test]
    fn not_json_is_an_error() {
        assert!(parse_catalog("<html>403 Forbidden</html>").is_err());
    }
}
