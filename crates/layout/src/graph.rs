use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

/// Seniority of a person, used to order siblings and root trees
///
/// The four built-in levels rank `Executive < Manager < Lead < Member`.
/// Anything else is a user-defined level and ranks after all of them.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    #[display("executive")]
    Executive,
    #[display("manager")]
    Manager,
    #[display("lead")]
    Lead,
    #[display("member")]
    Member,
    #[display("{_0}")]
    Other(String),
}

impl Level {
    /// Ordinal of a built-in level, `None` for user-defined ones
    pub fn rank(&self) -> Option<u8> {
        match self {
            Level::Executive => Some(0),
            Level::Manager => Some(1),
            Level::Lead => Some(2),
            Level::Member => Some(3),
            Level::Other(_) => None,
        }
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "executive" => Level::Executive,
            "manager" => Level::Manager,
            "lead" => Level::Lead,
            "member" => Level::Member,
            _ => Level::Other(value.to_string()),
        }
    }
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        Level::from(value.as_str())
    }
}

impl From<Level> for String {
    fn from(value: Level) -> Self {
        value.to_string()
    }
}

/// Kind tag of a relation between two people
#[derive(
    Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    #[display("reports_to")]
    ReportsTo,
    #[display("manages")]
    Manages,
    #[display("collaborates")]
    Collaborates,
    #[display("mentors")]
    Mentors,
    #[display("{_0}")]
    Other(String),
}

/// Kind names are matched ignoring case and surrounding whitespace, custom
/// names are kept lowercased so they compare the same way
impl From<&str> for RelationKind {
    fn from(value: &str) -> Self {
        let name = value.trim().to_ascii_lowercase();
        match name.as_str() {
            "reports_to" => RelationKind::ReportsTo,
            "manages" => RelationKind::Manages,
            "collaborates" => RelationKind::Collaborates,
            "mentors" => RelationKind::Mentors,
            _ => RelationKind::Other(name),
        }
    }
}

impl From<String> for RelationKind {
    fn from(value: String) -> Self {
        RelationKind::from(value.as_str())
    }
}

impl From<RelationKind> for String {
    fn from(value: RelationKind) -> Self {
        value.to_string()
    }
}

/// A person to be placed on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: Option<Level>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: None,
        }
    }

    pub fn with_level(mut self, level: impl Into<Level>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn rank(&self) -> Option<u8> {
        self.level.as_ref().and_then(Level::rank)
    }

    /// Total order used wherever people are listed side by side
    ///
    /// Built-in levels first by rank, then unknown levels, then by name and
    /// finally by id.
    pub fn sibling_order(&self, other: &Person) -> Ordering {
        level_order(self.rank(), other.rank())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Orders known ranks ascending, with unknown ranks last
pub(crate) fn level_order(a: Option<u8>, b: Option<u8>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A directed, kind-tagged link from `source` to `target`
///
/// For hierarchical kinds `source` is the parent in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
}

impl Relation {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: impl Into<RelationKind>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind: kind.into(),
        }
    }
}

/// Immutable snapshot of the people and relations of one canvas
#[derive(Debug, Clone, Default)]
pub struct OrgChart {
    people: Vec<Person>,
    relations: Vec<Relation>,
    index: HashMap<String, usize>,
}

impl OrgChart {
    /// Build a chart, keeping the first person for every repeated id
    pub fn new(people: Vec<Person>, relations: Vec<Relation>) -> Self {
        let mut index = HashMap::with_capacity(people.len());
        let mut unique = Vec::with_capacity(people.len());
        for person in people {
            if index.contains_key(&person.id) {
                warn!("Ignoring duplicate person id {:?}", person.id);
                continue;
            }
            index.insert(person.id.clone(), unique.len());
            unique.push(person);
        }

        Self {
            people: unique,
            relations,
            index,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn person(&self, index: usize) -> &Person {
        &self.people[index]
    }

    /// Index of the person with the given id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub(crate) fn sibling_order(&self, a: usize, b: usize) -> Ordering {
        self.people[a].sibling_order(&self.people[b])
    }
}
