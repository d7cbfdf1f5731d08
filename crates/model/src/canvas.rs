use crate::position::{format_position, parse_position, PositionError};
use derive_more::Display;
use orgtree_layout::{Level, OrgChart, Person, Positions, Relation, RelationKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid canvas document")]
    Json(#[from] serde_json::Error),

    #[error("node #{index} has no id")]
    MissingNodeId { index: usize },

    #[error("relation #{index} has no {end} node")]
    MissingEndpoint { index: usize, end: &'static str },

    #[error("relation #{index} has no relation kind")]
    MissingRelationKind { index: usize },

    #[error("node {id} has an invalid stored position")]
    Position {
        id: String,
        #[source]
        source: PositionError,
    },
}

/// Identifier as stored: older canvases used bare numbers
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    #[display("{_0}")]
    Text(String),
    #[display("{_0}")]
    Number(i64),
}

/// Payload nested under `data` by canvases saved from the diagram widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(
        default,
        alias = "_id",
        alias = "nodeId",
        alias = "node_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RawId>,

    #[serde(
        default,
        alias = "levelName",
        alias = "role",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<String>,

    #[serde(
        default,
        alias = "label",
        alias = "fullName",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Stored `"x y"` position
    #[serde(default, alias = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,

    /// Fields the layout does not use, kept for export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeRecord {
    fn level(&self) -> Option<&str> {
        self.level
            .as_deref()
            .or_else(|| self.data.as_ref()?.level.as_deref())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| {
            let data = self.data.as_ref()?;
            data.name.as_deref().or(data.label.as_deref())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(
        default,
        rename = "relationKind",
        alias = "relation_kind",
        alias = "kind",
        skip_serializing_if = "Option::is_none"
    )]
    pub relation_kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(
        default,
        alias = "sourceId",
        alias = "source_id",
        alias = "from",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<RawId>,

    #[serde(
        default,
        alias = "targetId",
        alias = "target_id",
        alias = "to",
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<RawId>,

    #[serde(
        default,
        rename = "relationKind",
        alias = "relation_kind",
        alias = "kind",
        alias = "relation",
        skip_serializing_if = "Option::is_none"
    )]
    pub relation_kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeRecord {
    fn relation_kind(&self) -> Option<&str> {
        self.relation_kind
            .as_deref()
            .or_else(|| self.data.as_ref()?.relation_kind.as_deref())
    }
}

/// A stored canvas: people, their relations and anything else it carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    #[serde(default, alias = "people", alias = "persons")]
    pub nodes: Vec<NodeRecord>,

    #[serde(default, alias = "relations", alias = "links")]
    pub edges: Vec<EdgeRecord>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CanvasDocument {
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Normalize the stored records into a chart
    pub fn to_chart(&self) -> Result<OrgChart, ImportError> {
        let people = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| -> Result<Person, ImportError> {
                let id = node.id.as_ref().ok_or(ImportError::MissingNodeId { index })?;
                let mut person = Person::new(id.to_string(), node.name().unwrap_or_default());
                person.level = node.level().map(Level::from);
                Ok(person)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let relations = self
            .edges
            .iter()
            .enumerate()
            .map(|(index, edge)| -> Result<Relation, ImportError> {
                let source = edge.source.as_ref().ok_or(ImportError::MissingEndpoint {
                    index,
                    end: "source",
                })?;
                let target = edge.target.as_ref().ok_or(ImportError::MissingEndpoint {
                    index,
                    end: "target",
                })?;
                let kind = edge
                    .relation_kind()
                    .ok_or(ImportError::MissingRelationKind { index })?;
                Ok(Relation::new(
                    source.to_string(),
                    target.to_string(),
                    RelationKind::from(kind),
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Imported {} people and {} relations",
            people.len(),
            relations.len()
        );
        Ok(OrgChart::new(people, relations))
    }

    /// Positions already stored on the nodes
    pub fn stored_positions(&self) -> Result<Positions, ImportError> {
        let mut positions = Positions::new();
        for node in &self.nodes {
            let (Some(id), Some(stored)) = (&node.id, &node.position) else {
                continue;
            };
            let point = parse_position(stored).map_err(|source| ImportError::Position {
                id: id.to_string(),
                source,
            })?;
            positions.insert(id.to_string(), point);
        }
        Ok(positions)
    }

    /// Store computed positions on the matching nodes
    pub fn apply_positions(&mut self, positions: &Positions) {
        for node in &mut self.nodes {
            let Some(id) = &node.id else {
                continue;
            };
            if let Some(&point) = positions.get(&id.to_string()) {
                node.position = Some(format_position(point));
            }
        }
    }
}
