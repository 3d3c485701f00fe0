use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::fmt;

/// Returned in place of a count when no class matches the instructor.
pub const NO_INSTRUCTOR_MESSAGE: &str = "There is no instructor by that name.";

/// A studio member.
///
/// `age` and `currentMember` are the fields the transformations look at.
/// Anything else in the source record (name, email, join date...) is kept
/// in `details` in its original order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub age: Number,
    pub current_member: bool,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.current_member
    }
}

/// A member with the `age` field removed.
///
/// Serialises `currentMember` first, then the remaining fields in their
/// source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub current_member: bool,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl From<&Member> for MemberProfile {
    fn from(member: &Member) -> Self {
        // `details` is public, so a hand-built member can still smuggle an age in.
        let details = member
            .details
            .iter()
            .filter(|(key, _)| key.as_str() != "age")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            current_member: member.current_member,
            details,
        }
    }
}

/// Difficulty of a class. Fixtures use both `2` and `"beginner"` styles.
///
/// Numeric levels keep their JSON form, so `2` and `2.5` both round-trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(Number),
    Text(String),
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => numeric(a)
                .total_cmp(&numeric(b))
                .then_with(|| a.is_f64().cmp(&b.is_f64())),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Every `Number` has an f64 reading unless arbitrary precision is enabled.
fn numeric(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaClass {
    pub title: String,
    pub instructor: String,
    pub level: Level,
    pub price_in_cents: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl YogaClass {
    pub fn new(
        title: impl Into<String>,
        instructor: impl Into<String>,
        level: impl Into<Level>,
        price_in_cents: u64,
    ) -> Self {
        Self {
            title: title.into(),
            instructor: instructor.into(),
            level: level.into(),
            price_in_cents,
            details: Map::new(),
        }
    }
}

/// One `[key, value]` entry of a new member record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair(pub String, pub Value);

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(key.into(), value.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> &Value {
        &self.1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPrice {
    pub title: String,
    pub price_in_cents: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassListing {
    pub title: String,
    pub instructor: String,
    pub level: Level,
}

/// Number of classes taught by one instructor.
///
/// Serialises as the bare count, or as [`NO_INSTRUCTOR_MESSAGE`] when the
/// instructor teaches nothing, which is the shape older JSON consumers expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassCount {
    Found(usize),
    NotFound,
}

impl ClassCount {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::NotFound
        } else {
            Self::Found(count)
        }
    }

    pub fn count(self) -> Option<usize> {
        match self {
            Self::Found(n) => Some(n),
            Self::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for ClassCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(n) => write!(f, "{n}"),
            Self::NotFound => f.write_str(NO_INSTRUCTOR_MESSAGE),
        }
    }
}

impl Serialize for ClassCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Found(n) => serializer.serialize_u64(*n as u64),
            Self::NotFound => serializer.serialize_str(NO_INSTRUCTOR_MESSAGE),
        }
    }
}

/// Classes partitioned by instructor, in order of each instructor's first class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructorGroups {
    groups: Vec<(String, Vec<YogaClass>)>,
}

impl InstructorGroups {
    pub(crate) fn from_groups(groups: Vec<(String, Vec<YogaClass>)>) -> Self {
        Self { groups }
    }

    pub fn get(&self, instructor: &str) -> Option<&[YogaClass]> {
        self.groups
            .iter()
            .find(|(name, _)| name == instructor)
            .map(|(_, classes)| classes.as_slice())
    }

    pub fn instructors(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[YogaClass])> {
        self.groups
            .iter()
            .map(|(name, classes)| (name.as_str(), classes.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for InstructorGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (instructor, classes) in &self.groups {
            map.serialize_entry(instructor, classes)?;
        }
        map.end()
    }
}
