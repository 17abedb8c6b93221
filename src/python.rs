//! Python bindings
//!
//! Exposes the model as a `_lib` extension module:
//!
//! ```python
//! from escm._lib import simulate
//!
//! result = simulate({"carbon_price": 100.0})
//! result["global_temp"][-1]
//! ```

use crate::boundary::{simulate as simulate_request, SimulationRequest};
use crate::model::ClimateModel;
use crate::parameters::ModelParameters;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pythonize::{depythonize, pythonize};

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(format!("{}", e))
}

/// Run a scenario and return the projection as a dict
///
/// Both arguments are optional dicts; missing levers and parameters take
/// their default values.
#[pyfunction]
#[pyo3(signature = (scenario=None, parameters=None))]
fn simulate<'py>(
    py: Python<'py>,
    scenario: Option<Bound<'py, PyAny>>,
    parameters: Option<Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyAny>> {
    let request = match scenario {
        Some(scenario) => SimulationRequest {
            scenario: depythonize(&scenario).map_err(to_py_err)?,
        },
        None => SimulationRequest::default(),
    };
    let model = match parameters {
        Some(parameters) => {
            let parameters: ModelParameters = depythonize(&parameters).map_err(to_py_err)?;
            ClimateModel::new(parameters).map_err(to_py_err)?
        }
        None => ClimateModel::default(),
    };

    let response = py
        .allow_threads(|| simulate_request(&model, &request))
        .map_err(to_py_err)?;
    pythonize(py, &response).map_err(to_py_err)
}

/// Default model parameters as a dict
#[pyfunction]
fn default_parameters(py: Python<'_>) -> PyResult<Bound<'_, PyAny>> {
    pythonize(py, &ModelParameters::default()).map_err(to_py_err)
}

#[pymodule]
#[pyo3(name = "_lib")]
fn escm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(default_parameters, m)?)?;
    Ok(())
}
