//! iCalendar component types (RFC 5545 §3.4-3.6).

use std::borrow::Cow;

use serde::{Deserialize, Serialize, Serializer};

use tessen_core::error::CoreError;

use super::{Property, PropertyKind};
use crate::error::RfcResult;

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// Unknown/X-component.
    Unknown,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Unknown => "X-UNKNOWN",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "VCALENDAR" => Self::Calendar,
            "VEVENT" => Self::Event,
            "VTODO" => Self::Todo,
            "VJOURNAL" => Self::Journal,
            "VFREEBUSY" => Self::FreeBusy,
            "VTIMEZONE" => Self::Timezone,
            "VALARM" => Self::Alarm,
            "STANDARD" => Self::Standard,
            "DAYLIGHT" => Self::Daylight,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Wire shape of a component; the kind is derived from the name.
#[derive(Deserialize)]
struct RawComponent {
    name: String,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    children: Vec<Component>,
}

/// An iCalendar component.
///
/// Components can contain properties and nested sub-components.
/// For example, a VCALENDAR contains VEVENTs, which may contain VALARMs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawComponent")]
pub struct Component {
    /// Component type.
    #[serde(skip_serializing)]
    pub kind: ComponentKind,
    /// Original component name (preserved for X-components).
    pub name: String,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl From<RawComponent> for Component {
    fn from(raw: RawComponent) -> Self {
        let mut component = Self::custom(raw.name);
        component.properties = raw.properties;
        component.children = raw.children;
        component
    }
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            name: kind.as_str().to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a new component with a custom name (for X-components).
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_uppercase();
        Self {
            kind: ComponentKind::parse(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTODO component.
    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    /// Creates a VJOURNAL component.
    #[must_use]
    pub fn journal() -> Self {
        Self::new(ComponentKind::Journal)
    }

    /// Creates a VFREEBUSY component.
    #[must_use]
    pub fn freebusy() -> Self {
        Self::new(ComponentKind::FreeBusy)
    }

    /// Creates a VTIMEZONE component.
    #[must_use]
    pub fn timezone() -> Self {
        Self::new(ComponentKind::Timezone)
    }

    /// Creates a VALARM component.
    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Component::add_property`].
    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.properties.push(prop);
        self
    }

    /// Builder-style variant of [`Component::add_child`].
    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Removes every property of the given kind.
    pub fn remove_properties(&mut self, kind: PropertyKind) {
        self.properties.retain(|p| p.kind != kind);
    }

    /// Returns the first property of the given kind.
    #[must_use]
    pub fn property(&self, kind: PropertyKind) -> Option<&Property> {
        self.properties.iter().find(|p| p.kind == kind)
    }

    /// Returns all properties of the given kind, in order of appearance.
    pub fn properties_of(&self, kind: PropertyKind) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.kind == kind)
    }

    /// Returns how many properties of the given kind this component carries.
    #[must_use]
    pub fn count_properties(&self, kind: PropertyKind) -> usize {
        self.properties_of(kind).count()
    }

    /// Returns the UID property value if present.
    ///
    /// Values that are not a single token (an integer, a multi-item list)
    /// are rendered as text.
    #[must_use]
    pub fn uid(&self) -> Option<Cow<'_, str>> {
        let value = &self.property(PropertyKind::Uid)?.value;
        Some(value.as_token().map_or_else(|| Cow::Owned(value.to_string()), Cow::Borrowed))
    }

    /// Returns the SEQUENCE property value if present and numeric.
    #[must_use]
    pub fn sequence(&self) -> Option<i64> {
        self.property(PropertyKind::Sequence)?.value.to_integer()
    }

    /// Returns the RECURRENCE-ID value rendered as text, if present.
    #[must_use]
    pub fn recurrence_id(&self) -> Option<String> {
        self.property(PropertyKind::RecurrenceId)
            .map(|p| p.value.to_string())
    }
}

/// Top-level iCalendar object.
///
/// This is a convenience wrapper around a VCALENDAR component
/// with helper methods for common operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates a new empty iCalendar with required properties.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::text("VERSION", "2.0"));
        root.add_property(Property::text("PRODID", prodid));
        Self { root }
    }

    /// Creates a new iCalendar carrying a METHOD property.
    #[must_use]
    pub fn with_method(prodid: impl Into<String>, method: impl Into<String>) -> Self {
        let mut ical = Self::new(prodid);
        ical.root.add_property(Property::text("METHOD", method));
        ical
    }

    /// Returns the PRODID value.
    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.property(PropertyKind::ProdId)?.value.as_token()
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.property(PropertyKind::Version)?.value.as_token()
    }

    /// Returns the METHOD value.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.root.property(PropertyKind::Method)?.value.as_token()
    }

    /// Adds a top-level component.
    pub fn add_component(&mut self, component: Component) {
        self.root.add_child(component);
    }

    /// Returns every top-level component, in order of appearance.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.root.children
    }

    /// ## Summary
    /// Reads a calendar object from its JSON rendition.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid JSON for the model, or
    /// if its root is not a VCALENDAR.
    pub fn from_json(input: &str) -> RfcResult<Self> {
        let calendar: Self = serde_json::from_str(input)?;
        if calendar.root.kind != ComponentKind::Calendar {
            return Err(CoreError::InvalidInput(format!(
                "expected VCALENDAR at the root, found {}",
                calendar.root.name
            ))
            .into());
        }
        Ok(calendar)
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new("-//Tessen//Tessen iTIP Validator//EN")
    }
}
