use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};

use crate::manager::manager::{
    IManager,
    ManagerBuilder
};
use crate::manager::managererror::{
    parse_json_value,
    ManagerError
};
use crate::manager::namedobject::NamedJsonObject;
use crate::math::dataset::dataset::DataSetError;
use crate::math::dataset::xpoints::generate_x_points;

/// Uniform sampling grid referenced by name from curve definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    lower_bound: f64,
    upper_bound: f64,
    num_points: usize,
    #[serde(default)]
    half_width_ends: bool
}

impl GridSpec {
    pub fn new(lower_bound: f64, upper_bound: f64, num_points: usize, half_width_ends: bool) -> GridSpec {
        GridSpec {
            lower_bound,
            upper_bound,
            num_points,
            half_width_ends
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn half_width_ends(&self) -> bool {
        self.half_width_ends
    }

    pub fn x_points(&self) -> Result<Vec<f64>, DataSetError> {
        generate_x_points(self.lower_bound, self.upper_bound, self.num_points, self.half_width_ends)
    }
}

pub struct GridLoader;

impl IManager<GridSpec, ()> for GridLoader {
    /// Grids are validated on load so a bad definition surfaces here rather
    /// than at the first curve that uses it.
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<GridSpec>,
        json_value: serde_json::Value,
        _supports: &(),
    ) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let grid: GridSpec = parse_json_value(json_value)?;
        grid.x_points()
            .map_err(|error| ManagerError::data_set(named_obj.name(), error))?;
        builder.insert(named_obj.name().to_owned(), Arc::new(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_named_grids() {
        let grids = GridLoader
            .load(
                &[
                    json!({ "name": "unit9", "lower_bound": 0.0, "upper_bound": 1.0, "num_points": 9 }),
                    json!({ "name": "half", "lower_bound": 0.0, "upper_bound": 1.0, "num_points": 10, "half_width_ends": true }),
                ],
                &(),
            )
            .unwrap();
        assert_eq!(grids.names(), vec!["half", "unit9"]);
        let unit9 = grids.get("unit9").unwrap();
        assert!(!unit9.half_width_ends());
        assert_eq!(unit9.x_points().unwrap()[4], 0.5);
        assert_eq!(grids.get("half").unwrap().x_points().unwrap().len(), 10);
    }

    #[test]
    fn rejects_invalid_and_duplicate_grids() {
        let bad = GridLoader.load(
            &[json!({ "name": "flat", "lower_bound": 1.0, "upper_bound": 1.0, "num_points": 9 })],
            &(),
        );
        assert!(matches!(
            bad,
            Err(ManagerError::DataSetError { source: DataSetError::InvalidBounds { .. }, .. })
        ));

        let grid = json!({ "name": "g", "lower_bound": 0.0, "upper_bound": 1.0, "num_points": 3 });
        let duplicate = GridLoader.load(&[grid.clone(), grid], &());
        assert!(matches!(duplicate, Err(ManagerError::DuplicateNameError(name)) if name == "g"));
    }
}
