use crate::errors::FloorError;
use crate::model::{Booth, BoothId};
use std::collections::HashSet;

/// What the cart controller needs from whatever holds the booths.
pub trait BoothSurface {
    fn booth(&self, id: &str) -> Option<&Booth>;

    /// Sets the selected marker. Returns false when no booth has that id.
    fn set_selected(&mut self, id: &str, selected: bool) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorPlan {
    booths: Vec<Booth>,
}

impl FloorPlan {
    /// Rejects duplicate ids. The error carries the 0-based index of the
    /// second occurrence; line numbers are the floor file parser's job.
    pub fn new(booths: Vec<Booth>) -> Result<Self, FloorError> {
        let mut seen = HashSet::new();
        for (position, booth) in booths.iter().enumerate() {
            if !seen.insert(booth.id.clone()) {
                return Err(FloorError::DuplicateBoothAt {
                    id: booth.id.clone(),
                    position,
                });
            }
        }
        Ok(Self { booths })
    }

    pub fn demo() -> Self {
        let booths = vec![
            Booth::new("A1", Some("50")),
            Booth::new("A2", Some("50")),
            Booth::new("A3", Some("75")).pre_booked(),
            Booth::new("A4", Some("75")),
            Booth::new("B1", Some("30")),
            Booth::new("B2", Some("30")),
            Booth::new("B3", Some("45")).pre_booked(),
            Booth::new("B4", Some("45")),
            Booth::new("C1", Some("120")),
            Booth::new("C2", Some("TBD")),
        ];
        Self { booths }
    }

    pub fn booths(&self) -> &[Booth] {
        &self.booths
    }

    pub fn len(&self) -> usize {
        self.booths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Booth> {
        self.booths.get(index)
    }

    pub fn selected_ids(&self) -> Vec<BoothId> {
        self.booths
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.id.clone())
            .collect()
    }
}

impl BoothSurface for FloorPlan {
    fn booth(&self, id: &str) -> Option<&Booth> {
        self.booths.iter().find(|b| b.id.as_str() == id)
    }

    fn set_selected(&mut self, id: &str, selected: bool) -> bool {
        match self.booths.iter_mut().find(|b| b.id.as_str() == id) {
            Some(booth) => {
                booth.selected = selected;
                true
            }
            None => false,
        }
    }
}
