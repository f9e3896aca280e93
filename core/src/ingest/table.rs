use crate::prelude::GeodeticSample;
use serde::{Deserialize, Serialize};

/// Fixed-schema trajectory table. Row order is time order and is never
/// re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    samples: Vec<GeodeticSample>,
}

impl SampleTable {
    pub fn new(samples: Vec<GeodeticSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[GeodeticSample] {
        &self.samples
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn latitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.latitude).collect()
    }

    pub fn longitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.longitude).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.altitude).collect()
    }
}

impl From<Vec<GeodeticSample>> for SampleTable {
    fn from(samples: Vec<GeodeticSample>) -> Self {
        Self::new(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_row_order() {
        let table = SampleTable::new(vec![
            GeodeticSample {
                time: 20.0,
                latitude: 1.0,
                longitude: 2.0,
                altitude: 3.0,
            },
            GeodeticSample {
                time: 10.0,
                latitude: 4.0,
                longitude: 5.0,
                altitude: 6.0,
            },
        ]);
        assert_eq!(table.times(), vec![20.0, 10.0]);
        assert_eq!(table.latitudes(), vec![1.0, 4.0]);
        assert_eq!(table.longitudes(), vec![2.0, 5.0]);
        assert_eq!(table.altitudes(), vec![3.0, 6.0]);
    }
}
