use crate::action::*;

///
/// Settings that control how the page compositor draws a document
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// Size of the canvas being rendered to, in pixels
    pub canvas_size: (u32, u32),

    /// Colour the canvas is cleared to before the pages are drawn
    pub background_color: Rgba8,

    /// Colour used to fill the page rectangles
    pub page_color: Rgba8,

    /// Distance between the origins of neighbouring pages, as a multiple of the page size
    pub page_gap: f32,

    /// Time it takes the view to catch up with a change to the transform, in milliseconds
    pub animation_duration: f64,

    /// Set to overlay the acceleration grid of each glyph
    pub show_grids: bool,
}

impl Default for RenderSettings {
    fn default() -> RenderSettings {
        RenderSettings {
            canvas_size:        (1024, 768),
            background_color:   Rgba8([160, 169, 175, 255]),
            page_color:         Rgba8([255, 255, 255, 255]),
            page_gap:           1.02,
            animation_duration: 60.0,
            show_grids:         false,
        }
    }
}

impl RenderSettings {
    ///
    /// Reads the settings from a JSON object (any missing fields are set to their default values)
    ///
    pub fn from_json(json: &str) -> Result<RenderSettings, serde_json::Error> {
        serde_json::from_str(json)
    }

    ///
    /// The canvas size as floating point values
    ///
    #[inline]
    pub fn canvas_size_f32(&self) -> (f32, f32) {
        (self.canvas_size.0 as f32, self.canvas_size.1 as f32)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = RenderSettings::from_json(r#"{ "showGrids": true, "canvasSize": [640, 480] }"#).unwrap();

        assert!(settings.show_grids);
        assert!(settings.canvas_size == (640, 480));
        assert!(settings.background_color == Rgba8([160, 169, 175, 255]));
        assert!(settings.page_gap == 1.02);
    }
}
