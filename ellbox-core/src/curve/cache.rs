use std::{collections::HashMap, sync::Arc};

use log::debug;
use ordered_float::OrderedFloat;

use crate::{ellipse::Ellipse, error::BoxError};

type Key = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Ellipses built during one generation run, keyed by radii.
///
/// Owned by the caller and passed to whatever needs ellipses; drop it when the run is done. Handed-out ellipses
/// are immutable and `Send + Sync`, so independent layouts may share them freely.
#[derive(Debug, Default)]
pub struct EllipseCache {
    ellipses: HashMap<Key, Arc<Ellipse>>,
}

impl EllipseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, rx: f64, ry: f64) -> Result<Arc<Ellipse>, BoxError> {
        let key = (OrderedFloat(rx), OrderedFloat(ry));
        if let Some(ellipse) = self.ellipses.get(&key) {
            return Ok(ellipse.clone());
        }
        let ellipse = Arc::new(Ellipse::new(rx, ry)?);
        debug!("built ellipse ({}, {}), circumference {:.3}", rx, ry, ellipse.circumference());
        self.ellipses.insert(key, ellipse.clone());
        Ok(ellipse)
    }

    pub fn len(&self) -> usize {
        self.ellipses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ellipses.is_empty()
    }
}
