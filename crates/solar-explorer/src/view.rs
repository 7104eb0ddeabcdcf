//! Sort controller: the working set plus its sort state

use crate::render::TableBody;
use crate::types::{CelestialBody, SortDirection, SortField};

/// Working set, selected field and direction flag
///
/// Starts in file order with the field selector on `name` and the direction
/// flag on descending. Every mutation re-sorts the full sequence.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    records: Vec<CelestialBody>,
    field: SortField,
    direction: SortDirection,
    sorted: bool,
}

impl ViewModel {
    /// Wrap a freshly loaded sequence, keeping its order
    pub fn new(records: Vec<CelestialBody>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Change the field and re-sort with the current direction
    pub fn sort_by(&mut self, field: SortField) -> &mut Self {
        self.field = field;
        self.resort()
    }

    /// Flip the direction flag and re-sort by the current field
    pub fn toggle_direction(&mut self) -> &mut Self {
        self.direction = self.direction.toggled();
        self.resort()
    }

    /// Set the direction flag and re-sort by the current field
    pub fn set_direction(&mut self, direction: SortDirection) -> &mut Self {
        self.direction = direction;
        self.resort()
    }

    /// Apply an optional field and direction in one step
    ///
    /// Without a field the records keep their current order and only the
    /// flag is stored.
    pub fn apply(&mut self, field: Option<SortField>, direction: SortDirection) -> &mut Self {
        self.direction = direction;
        match field {
            Some(field) => self.sort_by(field),
            None => self,
        }
    }

    fn resort(&mut self) -> &mut Self {
        let field = self.field;
        let direction = self.direction;
        self.records
            .sort_by(|a, b| direction.apply(field.compare(a, b)));
        self.sorted = true;
        self
    }

    pub fn records(&self) -> &[CelestialBody] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CelestialBody> {
        self.records
    }

    /// Currently selected field
    pub fn field(&self) -> SortField {
        self.field
    }

    /// Field the records are ordered by, `None` while in file order
    pub fn active_field(&self) -> Option<SortField> {
        self.sorted.then_some(self.field)
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Rebuild the table body for the current order
    pub fn render(&self) -> TableBody {
        TableBody::from_records(&self.records)
    }
}
