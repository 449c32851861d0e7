use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{
    FrozenManager,
    IManager,
    ManagerBuilder
};
use crate::manager::managererror::{
    parse_json_value,
    ManagerError
};
use crate::manager::namedobject::NamedJsonObject;
use crate::manager::gridmanager::GridSpec;
use crate::math::curve::compositecurve::CompositeCurve;
use crate::math::curve::cosinewave::CosineWave;
use crate::math::curve::curve::AnalyticCurve;
use crate::math::curve::polynomialcurve::PolynomialCurve;
use crate::math::curve::sinewave::SineWave;

// ─────────────────────────────────────────────────────────────────────────────
// 私有輔助函式
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
enum CurveType {
    Sine,
    Cosine,
    Polynomial,
    Composite
}

#[derive(Deserialize)]
struct CurveTypedObject {
    curve_type: CurveType
}

#[derive(Deserialize)]
struct WaveJsonProp {
    grid: String,
    amplitude: f64,
    frequency: f64
}

#[derive(Deserialize)]
struct PolynomialJsonProp {
    grid: String,
    coefficients: Vec<f64>
}

#[derive(Deserialize)]
struct CompositeJsonProp {
    components: Vec<String>,
    #[serde(default)]
    coefficients: Option<Vec<f64>>
}

fn grid_points(grids: &FrozenManager<GridSpec>, name: &str, grid: &str) -> Result<(Vec<f64>, bool), ManagerError> {
    let grid_spec = grids.get(grid)?;
    let x = grid_spec.x_points().map_err(|error| ManagerError::data_set(name, error))?;
    Ok((x, grid_spec.half_width_ends()))
}

fn sine_from_json(
    name: &str,
    json_value: serde_json::Value,
    grids: &FrozenManager<GridSpec>,
) -> Result<Arc<dyn AnalyticCurve>, ManagerError> {
    let json_prop: WaveJsonProp = parse_json_value(json_value)?;
    let (x, half_width_ends) = grid_points(grids, name, &json_prop.grid)?;
    let wave = SineWave::new(&x, half_width_ends, json_prop.amplitude, json_prop.frequency)
        .map_err(|error| ManagerError::data_set(name, error))?;
    Ok(Arc::new(wave))
}

fn cosine_from_json(
    name: &str,
    json_value: serde_json::Value,
    grids: &FrozenManager<GridSpec>,
) -> Result<Arc<dyn AnalyticCurve>, ManagerError> {
    let json_prop: WaveJsonProp = parse_json_value(json_value)?;
    let (x, half_width_ends) = grid_points(grids, name, &json_prop.grid)?;
    let wave = CosineWave::new(&x, half_width_ends, json_prop.amplitude, json_prop.frequency)
        .map_err(|error| ManagerError::data_set(name, error))?;
    Ok(Arc::new(wave))
}

fn polynomial_from_json(
    name: &str,
    json_value: serde_json::Value,
    grids: &FrozenManager<GridSpec>,
) -> Result<Arc<dyn AnalyticCurve>, ManagerError> {
    let json_prop: PolynomialJsonProp = parse_json_value(json_value)?;
    let (x, half_width_ends) = grid_points(grids, name, &json_prop.grid)?;
    let polynomial = PolynomialCurve::new(&x, half_width_ends, &json_prop.coefficients)
        .map_err(|error| ManagerError::data_set(name, error))?;
    Ok(Arc::new(polynomial))
}

// ─────────────────────────────────────────────────────────────────────────────
// CurveLoader
// ─────────────────────────────────────────────────────────────────────────────

/// 曲線的載入器，grid 由已凍結的 `FrozenManager<GridSpec>` 提供。
///
/// `Composite` 以名稱引用其他曲線，而 JSON 陣列中的順序不一定在子曲線之後；
/// 因此以 retry loop 處理載入順序。
pub struct CurveLoader;

impl IManager<dyn AnalyticCurve, FrozenManager<GridSpec>> for CurveLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<dyn AnalyticCurve>,
        json_value: serde_json::Value,
        grids: &FrozenManager<GridSpec>,
    ) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let typed_obj: CurveTypedObject = parse_json_value(json_value.clone())?;
        let name = named_obj.name();

        let curve: Arc<dyn AnalyticCurve> = match typed_obj.curve_type {
            CurveType::Sine => sine_from_json(name, json_value, grids)?,
            CurveType::Cosine => cosine_from_json(name, json_value, grids)?,
            CurveType::Polynomial => polynomial_from_json(name, json_value, grids)?,
            CurveType::Composite => {
                let json_prop: CompositeJsonProp = parse_json_value(json_value)?;
                // 子曲線尚未載入 → Err → 下一輪重試
                let components = json_prop
                    .components
                    .iter()
                    .map(|component| builder.get(component))
                    .collect::<Result<Vec<_>, _>>()?;
                let composite = CompositeCurve::new(components, json_prop.coefficients)
                    .map_err(|error| ManagerError::data_set(name, error))?;
                Arc::new(composite)
            }
        };
        builder.insert(name.to_owned(), curve)
    }

    /// Retries failed definitions until a full pass makes no progress, then
    /// returns the last failure.
    fn insert_obj_from_json_vec(
        &self,
        builder: &mut ManagerBuilder<dyn AnalyticCurve>,
        json_vec: &[serde_json::Value],
        grids: &FrozenManager<GridSpec>,
    ) -> Result<(), ManagerError> {
        let mut remain_indices: Vec<usize> = (0..json_vec.len()).collect();
        let mut result: Result<(), ManagerError> = Ok(());

        loop {
            let mut new_remain_indices: Vec<usize> = Vec::new();

            for &index in remain_indices.iter() {
                result = self.insert_obj_from_json(builder, json_vec[index].clone(), grids);
                if result.is_err() {
                    new_remain_indices.push(index);
                }
            }

            if new_remain_indices.is_empty() {
                return Ok(());
            }
            if remain_indices == new_remain_indices {
                return result;
            }

            remain_indices = new_remain_indices;
        }
    }
}
