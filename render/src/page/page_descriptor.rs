///
/// Describes a page of the document as supplied by the page list
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Width of the page in pixels
    pub width: f32,

    /// Height of the page in pixels
    pub height: f32,

    /// The first glyph vertex on this page (4 vertices per glyph)
    pub begin_vertex: usize,

    /// The vertex after the last glyph vertex on this page
    pub end_vertex: usize,
}

impl PageDescriptor {
    ///
    /// Parses a list of page descriptors from a JSON array
    ///
    pub fn list_from_json(json: &str) -> Result<Vec<PageDescriptor>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
