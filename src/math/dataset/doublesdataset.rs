use serde::{
    Deserialize,
    Serialize
};

use crate::math::dataset::dataset::{
    DataSet,
    DataSetError
};
use crate::math::dataset::xpoints::check_x_integrity;

#[derive(Serialize, Deserialize)]
struct DoublesDataSetJsonProp {
    x: Vec<f64>,
    fx: Vec<f64>,
    #[serde(default)]
    half_width_ends: bool
}

/// A set of (x, f(x)) pairs obtained by some external mechanism, e.g. read
/// from a simulation, ready for numerical integration.
///
/// Deserialization goes through [`DoublesDataSet::new`], so a JSON document
/// with an invalid grid is rejected at parse time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DoublesDataSetJsonProp", into = "DoublesDataSetJsonProp")]
pub struct DoublesDataSet {
    x: Vec<f64>,
    fx: Vec<f64>,
    half_width_ends: bool
}

impl DoublesDataSet {
    pub fn new(x: Vec<f64>, fx: Vec<f64>, half_width_ends: bool) -> Result<DoublesDataSet, DataSetError> {
        if x.len() != fx.len() {
            return Err(DataSetError::LengthMismatch {
                x_len: x.len(),
                fx_len: fx.len()
            });
        }
        check_x_integrity(&x, half_width_ends)?;
        Ok(DoublesDataSet { x, fx, half_width_ends })
    }

    pub fn from_slices(x: &[f64], fx: &[f64], half_width_ends: bool) -> Result<DoublesDataSet, DataSetError> {
        DoublesDataSet::new(x.to_vec(), fx.to_vec(), half_width_ends)
    }
}

impl TryFrom<DoublesDataSetJsonProp> for DoublesDataSet {
    type Error = DataSetError;

    fn try_from(prop: DoublesDataSetJsonProp) -> Result<Self, Self::Error> {
        DoublesDataSet::new(prop.x, prop.fx, prop.half_width_ends)
    }
}

impl From<DoublesDataSet> for DoublesDataSetJsonProp {
    fn from(data: DoublesDataSet) -> Self {
        DoublesDataSetJsonProp {
            x: data.x,
            fx: data.fx,
            half_width_ends: data.half_width_ends
        }
    }
}

impl DataSet for DoublesDataSet {
    fn x(&self) -> &[f64] {
        &self.x
    }

    fn points(&self) -> &[f64] {
        &self.fx
    }

    fn half_width_ends(&self) -> bool {
        self.half_width_ends
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::dataset::xpoints::generate_x_points;

    #[test]
    fn derives_bounds_and_bin_width() {
        let x = generate_x_points(0.0, 2.0, 5, false).unwrap();
        let fx = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let data = DoublesDataSet::new(x, fx, false).unwrap();
        assert_eq!(data.lower_bound(), 0.0);
        assert_eq!(data.upper_bound(), 2.0);
        assert_eq!(data.num_points(), 5);
        assert_eq!(data.bin_width(), 0.5);
        assert_eq!(data.point(3), Some(4.0));
        assert_eq!(data.point(5), None);
    }

    #[test]
    fn half_width_bin_width_divides_by_n_minus_two() {
        let x = generate_x_points(0.0, 1.0, 6, true).unwrap();
        let data = DoublesDataSet::new(x, vec![0.0; 6], true).unwrap();
        assert_eq!(data.bin_width(), 0.25);
        assert!(data.half_width_ends());
    }

    #[test]
    fn all_points_is_a_copy() {
        let data = DoublesDataSet::from_slices(&[0.0, 1.0], &[3.0, 4.0], false).unwrap();
        let mut copy = data.all_points();
        copy[0] = 100.0;
        assert_eq!(data.point(0), Some(3.0));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = DoublesDataSet::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0], false);
        assert_eq!(result, Err(DataSetError::LengthMismatch { x_len: 3, fx_len: 2 }));
    }

    #[test]
    fn rejects_uneven_grid() {
        let result = DoublesDataSet::new(vec![0.0, 0.1, 0.5, 1.0], vec![0.0; 4], false);
        assert!(matches!(result, Err(DataSetError::UnevenSpacing { .. })));
    }

    #[test]
    fn json_round_trip_validates() {
        let json = r#"{ "x": [0.0, 0.5, 1.0], "fx": [1.0, 2.0, 3.0] }"#;
        let data: DoublesDataSet = serde_json::from_str(json).unwrap();
        assert!(!data.half_width_ends());
        assert_eq!(data.points(), &[1.0, 2.0, 3.0]);

        let written = serde_json::to_string(&data).unwrap();
        let reread: DoublesDataSet = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, data);

        let bad = r#"{ "x": [0.0, 0.9, 1.0], "fx": [1.0, 2.0, 3.0] }"#;
        assert!(serde_json::from_str::<DoublesDataSet>(bad).is_err());
    }
}
