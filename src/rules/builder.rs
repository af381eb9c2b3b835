//! Builder for automation rules.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::object_type;

use super::RuleError;
use super::catalog::{actions, conditions, events};
use super::grammar::{self, ConditionJoiner};
use super::params::{CONDITIONAL_VALUES, UNIT_VALUES};

/// Which catalog an entry is validated against.
#[derive(Debug, Clone, Copy)]
enum RuleKind {
    Event,
    Condition,
    Action,
}

impl RuleKind {
    fn required_params(self, rule: &str) -> Option<&'static [&'static str]> {
        match self {
            Self::Event => events::required_params(rule),
            Self::Condition => conditions::required_params(rule),
            Self::Action => actions::required_params(rule),
        }
    }

    fn is_restricted(self, rule: &str) -> bool {
        match self {
            Self::Event => events::is_restricted(rule),
            Self::Condition => conditions::is_restricted(rule),
            Self::Action => actions::is_restricted(rule),
        }
    }
}

/// A validated operation name plus its positional parameter values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RuleEntry {
    name: String,
    params: Vec<String>,
}

impl RuleEntry {
    fn render(&self) -> String {
        let delimiter = if self.name == actions::PING_URL {
            "::"
        } else {
            ","
        };
        grammar::format_term(&self.name, &self.params, delimiter)
    }
}

/// A condition entry together with its relation to the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConditionEntry {
    joiner: Option<ConditionJoiner>,
    entry: RuleEntry,
}

/// A stored rule record as returned by the Rules endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Rule name.
    pub name: String,
    /// Object type the rule applies to.
    pub object_type_id: i64,
    /// Id of the stored rule, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Serialized events string.
    pub events: String,
    /// Serialized conditions string; empty or absent when the rule has
    /// no conditions.
    #[serde(default)]
    pub conditions: Option<String>,
    /// Serialized actions string.
    pub actions: String,
}

/// Assembles automation rules from typed entries and serializes them to
/// the request parameters expected by the Rules endpoints.
///
/// Every added entry is validated against the operation catalogs: the
/// name must be known, restricted operations require the contact object
/// type, the parameter count must match the schema, and constrained
/// parameter values must come from their vocabulary.
///
/// # Example
///
/// ```
/// use ontraport::rules::{RuleBuilder, catalog::actions, catalog::events};
///
/// # fn main() -> Result<(), ontraport::rules::RuleError> {
/// let mut rule = RuleBuilder::new("Welcome new contacts", 0);
/// rule.add_event(events::OBJECT_CREATED, &[])?;
/// rule.add_action(actions::SEND_EMAIL, &["13"])?;
/// let params = rule.to_request_params()?;
/// assert_eq!(params["events"], "Contact_added_to_my_database()");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBuilder {
    name: String,
    object_type_id: i64,
    id: Option<i64>,
    events: Vec<RuleEntry>,
    conditions: Vec<ConditionEntry>,
    actions: Vec<RuleEntry>,
}

impl RuleBuilder {
    /// Creates a builder for a new rule on the given object type.
    #[must_use]
    pub fn new(name: impl Into<String>, object_type_id: i64) -> Self {
        Self {
            name: name.into(),
            object_type_id,
            id: None,
            events: Vec::new(),
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Sets the id of an existing rule, for updates.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// The rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object type the rule applies to.
    #[must_use]
    pub const fn object_type_id(&self) -> i64 {
        self.object_type_id
    }

    /// The id of the stored rule, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// The serialized form of each added event, in order.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.iter().map(RuleEntry::render).collect()
    }

    /// The serialized form of each added condition, in order, including
    /// joiner prefixes.
    #[must_use]
    pub fn conditions(&self) -> Vec<String> {
        self.conditions
            .iter()
            .map(|condition| {
                let mut rendered = String::new();
                if let Some(joiner) = condition.joiner {
                    rendered.push(joiner.prefix());
                }
                rendered.push_str(&condition.entry.render());
                rendered
            })
            .collect()
    }

    /// The serialized form of each added action, in order.
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        self.actions.iter().map(RuleEntry::render).collect()
    }

    /// Adds a trigger event.
    ///
    /// # Errors
    ///
    /// Fails when the event name is unknown, restricted to contacts
    /// while this rule targets another object type, or the parameters do
    /// not satisfy the event's schema.
    pub fn add_event(&mut self, event: &str, params: &[&str]) -> Result<(), RuleError> {
        let entry = self.checked_entry(RuleKind::Event, event, params)?;
        self.events.push(entry);
        Ok(())
    }

    /// Adds a condition.
    ///
    /// The first condition must not carry a joiner; every later one must
    /// declare whether it is AND- or OR-related to its predecessor.
    ///
    /// # Errors
    ///
    /// Fails for unknown or restricted conditions, schema violations,
    /// or a missing joiner on a non-initial condition.
    pub fn add_condition(
        &mut self,
        condition: &str,
        params: &[&str],
        joiner: Option<ConditionJoiner>,
    ) -> Result<(), RuleError> {
        let entry = self.checked_entry(RuleKind::Condition, condition, params)?;
        let joiner = if self.conditions.is_empty() {
            None
        } else if joiner.is_none() {
            return Err(RuleError::MissingJoiner);
        } else {
            joiner
        };
        self.conditions.push(ConditionEntry { joiner, entry });
        Ok(())
    }

    /// Adds an action.
    ///
    /// `Ping_APIURL` accepts any non-empty parameter list and joins its
    /// parameters with `::` when rendered; every other action requires
    /// exactly the schema's parameter count.
    ///
    /// # Errors
    ///
    /// Fails when the action name is unknown, restricted to contacts
    /// while this rule targets another object type, or the parameters do
    /// not satisfy the action's schema.
    pub fn add_action(&mut self, action: &str, params: &[&str]) -> Result<(), RuleError> {
        let entry = self.checked_entry(RuleKind::Action, action, params)?;
        self.actions.push(entry);
        Ok(())
    }

    /// Removes every event with the given operation name.
    pub fn remove_event_by_name(&mut self, name: &str) {
        self.events.retain(|entry| entry.name != name);
    }

    /// Removes every condition with the given operation name.
    pub fn remove_condition_by_name(&mut self, name: &str) {
        self.conditions.retain(|condition| condition.entry.name != name);
    }

    /// Removes every action with the given operation name.
    pub fn remove_action_by_name(&mut self, name: &str) {
        self.actions.retain(|entry| entry.name != name);
    }

    /// Clears all events.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Clears all conditions.
    pub fn clear_conditions(&mut self) {
        self.conditions.clear();
    }

    /// Clears all actions.
    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    /// Serializes the rule into request parameters for the Rules
    /// endpoints.
    ///
    /// # Errors
    ///
    /// Fails with [`RuleError::MissingEventsOrActions`] unless at least
    /// one event and one action have been added.
    pub fn to_request_params(&self) -> Result<Value, RuleError> {
        if self.events.is_empty() || self.actions.is_empty() {
            return Err(RuleError::MissingEventsOrActions);
        }

        let mut conditions = String::new();
        for condition in &self.conditions {
            if let Some(joiner) = condition.joiner {
                conditions.push(joiner.prefix());
            }
            conditions.push_str(&condition.entry.render());
        }

        let mut params = json!({
            "object_type_id": self.object_type_id,
            "name": self.name,
            "events": self.events().join(";"),
            "conditions": conditions,
            "actions": self.actions().join(";"),
        });
        if let Some(id) = self.id {
            params["id"] = json!(id);
        }
        Ok(params)
    }

    /// Reconstructs a builder from a stored rule record.
    ///
    /// Each recovered term is re-added through the normal entry points,
    /// so all catalog and schema validation applies to the stored data
    /// as well.
    ///
    /// # Errors
    ///
    /// Fails when a term cannot be parsed or does not validate against
    /// the catalogs.
    pub fn from_record(record: &RuleRecord) -> Result<Self, RuleError> {
        let mut builder = Self::new(record.name.clone(), record.object_type_id);
        builder.id = record.id;

        for term in grammar::split_terms(&record.events) {
            let parsed = grammar::parse_term(&term)?;
            builder.add_event(&parsed.name, &borrowed(&parsed.params))?;
        }
        for term in grammar::split_terms(&record.actions) {
            let parsed = grammar::parse_term(&term)?;
            builder.add_action(&parsed.name, &borrowed(&parsed.params))?;
        }
        if let Some(raw) = record.conditions.as_deref() {
            for (joiner, term) in grammar::tokenize_conditions(raw) {
                let parsed = grammar::parse_term(&term)?;
                builder.add_condition(&parsed.name, &borrowed(&parsed.params), joiner)?;
            }
        }
        Ok(builder)
    }

    /// Reconstructs a builder from a decoded JSON response object.
    ///
    /// Numeric fields are accepted both as JSON numbers and as decimal
    /// strings, which is how the API returns them.
    ///
    /// # Errors
    ///
    /// Fails when a required field is missing or the rule strings do not
    /// validate; see [`RuleBuilder::from_record`].
    pub fn from_response(data: &Value) -> Result<Self, RuleError> {
        let record = RuleRecord {
            name: field_str(data, "name")?.to_string(),
            object_type_id: lenient_i64(data.get("object_type_id"))
                .ok_or(RuleError::InvalidRecord("object_type_id"))?,
            id: lenient_i64(data.get("id")),
            events: field_str(data, "events")?.to_string(),
            conditions: data
                .get("conditions")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            actions: field_str(data, "actions")?.to_string(),
        };
        Self::from_record(&record)
    }

    fn checked_entry(
        &self,
        kind: RuleKind,
        name: &str,
        params: &[&str],
    ) -> Result<RuleEntry, RuleError> {
        let schema = kind
            .required_params(name)
            .ok_or_else(|| RuleError::UnknownRule(name.to_string()))?;

        if kind.is_restricted(name) && self.object_type_id != object_type::CONTACT {
            return Err(RuleError::RestrictedRule(name.to_string()));
        }

        let variable_arity = name == actions::PING_URL;
        if variable_arity {
            if params.is_empty() {
                return Err(RuleError::ParameterCount {
                    rule: name.to_string(),
                    expected: schema.len(),
                    received: 0,
                });
            }
        } else if params.len() != schema.len() {
            return Err(RuleError::ParameterCount {
                rule: name.to_string(),
                expected: schema.len(),
                received: params.len(),
            });
        }

        let mut invalid = Vec::new();
        for (param, value) in schema.iter().zip(params) {
            let valid = match *param {
                "conditional" => CONDITIONAL_VALUES.iter().any(|allowed| allowed == value),
                "units" => UNIT_VALUES.iter().any(|allowed| allowed == value),
                "option" => numeric_in_range(value, 0.0, 3.0),
                "outcome" => numeric_in_range(value, 0.0, 1.0),
                _ => true,
            };
            if !valid {
                invalid.push((*param).to_string());
            }
        }
        if !invalid.is_empty() {
            return Err(RuleError::InvalidParameterValues(invalid));
        }

        Ok(RuleEntry {
            name: name.to_string(),
            params: params.iter().map(ToString::to_string).collect(),
        })
    }
}

fn field_str<'a>(data: &'a Value, name: &'static str) -> Result<&'a str, RuleError> {
    data.get(name)
        .and_then(Value::as_str)
        .ok_or(RuleError::InvalidRecord(name))
}

fn numeric_in_range(value: &str, min: f64, max: f64) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|number| number >= min && number <= max)
}

fn lenient_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn borrowed(params: &[String]) -> Vec<&str> {
    params.iter().map(String::as_str).collect()
}
