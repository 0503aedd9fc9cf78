//! City records

use serde::{Deserialize, Serialize};

use crate::graph::RouteGraph;

/// Key a city is indexed under.
pub type CityId = u32;

/// A registered city and the route graph of its neighborhoods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub routes: RouteGraph,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        City {
            id,
            name: name.into(),
            routes: RouteGraph::new(),
        }
    }
}
