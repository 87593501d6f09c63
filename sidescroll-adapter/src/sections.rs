use alloc::string::String;
use alloc::vec::Vec;

/// A named section of the horizontal experience and its pixel offset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub id: String,
    pub offset: f64,
}

/// An ordered registry resolving section names to scroll offsets.
///
/// The host measures each section's offset once it knows the layout
/// (re-registering on resize) and navigation requests resolve against the
/// map, so navigation UI never needs a handle to the layout itself.
/// Registration order is display order, which `active_index` relies on.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section, or updates its offset when the id is already
    /// known (order is preserved).
    pub fn register(&mut self, id: impl Into<String>, offset: f64) {
        let id = id.into();
        if let Some(existing) = self.sections.iter_mut().find(|s| s.id == id) {
            existing.offset = offset;
            return;
        }
        self.sections.push(Section { id, offset });
    }

    pub fn resolve(&self, id: &str) -> Option<f64> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.offset)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Index of the section nearest a surface offset, assuming one section
    /// per `section_width` (typically the viewport width).
    pub fn active_index(&self, offset: f64, section_width: f64) -> Option<usize> {
        if self.sections.is_empty() || section_width <= 0.0 {
            return None;
        }
        let index = (offset.max(0.0) / section_width + 0.5) as usize;
        Some(index.min(self.sections.len() - 1))
    }

    /// Id of the section nearest a surface offset.
    pub fn active_id(&self, offset: f64, section_width: f64) -> Option<&str> {
        let index = self.active_index(offset, section_width)?;
        self.sections.get(index).map(|s| s.id.as_str())
    }
}
