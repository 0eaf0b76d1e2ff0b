//! HTML rendering of map artifacts.

use askama::Template;

use super::MapArtifact;

/// Errors that can occur while rendering a map page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The artifact could not be serialized
    #[error("could not serialize map: {0}")]
    Json(#[from] serde_json::Error),

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// Standalone Leaflet page.
#[derive(Template)]
#[template(path = "map.html")]
struct MapPage {
    title: String,
    map_json: String,
}

/// Render a map as a self-contained HTML page.
pub fn render_html(map: &MapArtifact, title: &str) -> Result<String, RenderError> {
    let page = MapPage {
        title: title.to_string(),
        map_json: script_safe(&map.to_json()?),
    };
    Ok(page.render()?)
}

/// Make JSON safe to embed in a `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::domain::{Coordinate, Station};
    use crate::map::build_map;

    fn sample_map(name: &str) -> MapArtifact {
        let station = Station::new(name, (1.30, 103.80));
        let points = [
            Coordinate::new(1.30, 103.80),
            Coordinate::new(1.31, 103.81),
            Coordinate::new(1.30, 103.82),
        ];
        build_map(
            &points,
            Coordinate::new(1.303, 103.81),
            Some(&station),
            &MapConfig::default(),
        )
    }

    #[test]
    fn renders_leaflet_page() {
        let html = render_html(&sample_map("ALPHA MRT STATION"), "Nearest MRT").unwrap();

        assert!(html.contains("<title>Nearest MRT</title>"));
        assert!(html.contains("leaflet"));
        assert!(html.contains("Nearest MRT: ALPHA MRT STATION"));
        assert!(html.contains("\"zoom\":14"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_html(&sample_map("X MRT STATION"), "<b>map</b>").unwrap();
        assert!(!html.contains("<b>map</b>"));
    }

    #[test]
    fn station_names_cannot_close_the_script() {
        let html = render_html(&sample_map("</script><b>MRT STATION"), "map").unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<\\/script><b>MRT STATION"));
    }

    #[test]
    fn script_safe_escapes_closing_tags() {
        assert_eq!(script_safe(r#"{"a":"</x>"}"#), r#"{"a":"<\/x>"}"#);
        assert_eq!(script_safe("{}"), "{}");
    }
}
