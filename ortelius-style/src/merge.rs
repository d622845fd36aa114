use crate::document::{LayerType, Source, StyleDocument, StyleLayer};

impl StyleDocument {
    /// Returns a copy of the document with all `fill-extrusion` layers removed.
    /// The relative order of the remaining layers is unchanged.
    pub fn without_fill_extrusion_layers(&self) -> Self {
        let mut result = self.clone();
        result
            .layers
            .retain(|layer| layer.kind != LayerType::FillExtrusion);

        let dropped = self.layers.len() - result.layers.len();
        if dropped > 0 {
            log::debug!(
                "Dropped {dropped} {} layer(s) from style '{}'",
                LayerType::FillExtrusion,
                self.name.as_deref().unwrap_or("unnamed")
            );
        }

        result
    }

    /// Returns a copy of the document with the given layers appended after the
    /// existing ones, so they are painted on top.
    pub fn append_layers(&self, layers: impl IntoIterator<Item = StyleLayer>) -> Self {
        let mut result = self.clone();
        result.layers.extend(layers);
        result
    }

    /// Returns a copy of the document with the source registered under the given
    /// id, replacing any source previously registered under it.
    pub fn with_source(&self, id: impl Into<String>, source: Source) -> Self {
        let mut result = self.clone();
        result.sources.insert(id.into(), source);
        result
    }

    /// Merges an overlay fragment into this base document.
    ///
    /// Extrusion layers of the base are dropped, the fragment's layers are
    /// appended on top of the remaining ones, and the fragment's sources are
    /// registered. Everything else (version, name, sprite, glyphs, unrecognized
    /// fields) is kept from the base.
    pub fn merge_overlay(&self, overlay: &StyleDocument) -> Self {
        let mut merged = self
            .without_fill_extrusion_layers()
            .append_layers(overlay.layers.iter().cloned());
        for (id, source) in &overlay.sources {
            merged = merged.with_source(id.clone(), source.clone());
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::document::JsonObject;
    use crate::overlay::{GeoJsonOverlay, OVERLAY_SOURCE_ID};

    fn base_style() -> StyleDocument {
        serde_json::from_value(json!({
            "version": 8,
            "name": "Streets",
            "sprite": "mapbox://sprites/mapbox/streets-v9",
            "glyphs": "mapbox://fonts/mapbox/{fontstack}/{range}.pbf",
            "owner": "mapbox",
            "sources": {
                "composite": {"url": "mapbox://mapbox.mapbox-streets-v7", "type": "vector"}
            },
            "layers": [
                {"id": "land", "type": "background", "paint": {"background-color": "#ead9c5"}},
                {"id": "building-3d", "type": "fill-extrusion", "source": "composite",
                 "source-layer": "building", "paint": {"fill-extrusion-height": 20.0}},
                {"id": "water", "type": "fill", "source": "composite", "source-layer": "water"},
                {"id": "bridge-3d", "type": "fill-extrusion", "source": "composite",
                 "source-layer": "structure"},
                {"id": "poi-label", "type": "symbol", "source": "composite",
                 "source-layer": "poi_label"}
            ]
        }))
        .expect("valid style")
    }

    #[test]
    fn drops_every_extrusion_layer_and_keeps_order() {
        let stripped = base_style().without_fill_extrusion_layers();

        let ids: Vec<&str> = stripped.layers.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["land", "water", "poi-label"]);
        assert!(stripped
            .layers
            .iter()
            .all(|l| l.kind != LayerType::FillExtrusion));
    }

    #[test]
    fn append_layers_paints_on_top() {
        let extended = base_style().append_layers(vec![StyleLayer::new(
            "annotations",
            LayerType::Circle,
        )]);

        assert_eq!(
            extended.layers.last().map(|l| l.id.as_str()),
            Some("annotations")
        );
        assert_eq!(extended.layers.len(), base_style().layers.len() + 1);
    }

    #[test]
    fn with_source_replaces_existing_entry() {
        let replaced = base_style().with_source(
            "composite",
            Source::vector_url("mapbox://mapbox.mapbox-streets-v8"),
        );

        assert_eq!(
            replaced
                .source("composite")
                .and_then(|s| s.url.as_deref()),
            Some("mapbox://mapbox.mapbox-streets-v8")
        );
    }

    #[test]
    fn merge_appends_overlay_after_surviving_base_layers() {
        let overlay = GeoJsonOverlay::new().with_opacity(0.5).compose();
        let merged = base_style().merge_overlay(&overlay);

        let ids: Vec<&str> = merged.layers.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "land",
                "water",
                "poi-label",
                "geojson-fill",
                "geojson-line",
                "geojson-circle",
                "geojson-label"
            ]
        );

        assert!(merged.source(OVERLAY_SOURCE_ID).is_some());
        assert!(merged.source("composite").is_some());
    }

    #[test]
    fn merge_keeps_base_identity_fields() {
        let merged = base_style().merge_overlay(&GeoJsonOverlay::new().compose());

        assert_eq!(merged.version, 8);
        assert_eq!(merged.name.as_deref(), Some("Streets"));
        assert_eq!(
            merged.sprite.as_deref(),
            Some("mapbox://sprites/mapbox/streets-v9")
        );
        assert_eq!(
            merged.glyphs.as_deref(),
            Some("mapbox://fonts/mapbox/{fontstack}/{range}.pbf")
        );
        assert_eq!(merged.extra.get("owner"), Some(&json!("mapbox")));
    }

    #[test]
    fn merging_into_fallback_keeps_background() {
        let merged = StyleDocument::fallback().merge_overlay(&GeoJsonOverlay::new().compose());

        assert_eq!(merged.layers[0].id, "background");
        assert_eq!(merged.layers.len(), 5);
        assert!(merged.source("mapbox").is_some());
        assert!(merged.source(OVERLAY_SOURCE_ID).is_some());
    }

    #[test]
    fn merge_does_not_touch_unrelated_paint() {
        let merged = base_style().merge_overlay(&GeoJsonOverlay::new().compose());
        let land = merged.layer("land").expect("land layer");

        let mut expected = JsonObject::new();
        expected.insert("background-color".to_owned(), json!("#ead9c5"));
        assert_eq!(land.paint, expected);
    }
}
