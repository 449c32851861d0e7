use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::curvemanager::CurveLoader;
use crate::manager::gridmanager::{
    GridLoader,
    GridSpec
};
use crate::manager::manager::{
    FrozenManager,
    IManager
};
use crate::manager::managererror::ManagerError;
use crate::math::curve::curve::AnalyticCurve;
use crate::math::integration::parallelintegrator::ParallelConfig;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    grids: Vec<serde_json::Value>,
    #[serde(default)]
    curves: Vec<serde_json::Value>,
    #[serde(default)]
    parallel: ParallelConfig
}

/// Named grids and curves plus the parallel tuning, loaded together from one
/// JSON document.
///
/// Grids load first since every non-composite curve names one.
pub struct Configuration {
    grid_manager: FrozenManager<GridSpec>,
    curve_manager: FrozenManager<dyn AnalyticCurve>,
    parallel_config: ParallelConfig
}

impl Configuration {
    pub fn from_reader(file_path: &str) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let grid_manager = GridLoader.load(&json_prop.grids, &())?;
        let curve_manager = CurveLoader.load(&json_prop.curves, &grid_manager)?;
        Ok(Configuration {
            grid_manager,
            curve_manager,
            parallel_config: json_prop.parallel
        })
    }

    pub fn grid_manager(&self) -> &FrozenManager<GridSpec> {
        &self.grid_manager
    }

    pub fn curve_manager(&self) -> &FrozenManager<dyn AnalyticCurve> {
        &self.curve_manager
    }

    pub fn curve(&self, name: &str) -> Result<Arc<dyn AnalyticCurve>, ManagerError> {
        self.curve_manager.get(name)
    }

    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel_config
    }
}
