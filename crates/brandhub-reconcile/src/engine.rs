//! The repair pipeline
//!
//! sanitize → lift (sections direction only) → root merge → forced fields →
//! section derivation → stable sort.

use brandhub_links::deep_sanitize;
use brandhub_model::{
    clone_blueprint, now_millis, sort_sections, Brand, BrandSection, SectionDescriptor,
    CANONICAL_SECTIONS, SCHEMA_VERSION,
};
use brandhub_schema::is_present;
use serde_json::{Map, Value};
use tracing::debug;

use crate::direction::SyncDirection;
use crate::error::{RepairError, RepairResult};
use crate::lift::lift_sections;
use crate::merge::{merge_root, take};

/// Clock returning milliseconds since the Unix epoch
pub type Clock = fn() -> i64;

/// Repairs arbitrary brand JSON into a complete, consistent [`Brand`]
///
/// Stateless apart from its clock; one instance can serve any number of
/// callers.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler {
    clock: Clock,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self { clock: now_millis }
    }
}

impl Reconciler {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed or simulated clock
    #[inline]
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Repair a raw record
    ///
    /// Fails only when `input` is not a JSON object.
    pub fn repair(&self, input: &Value, direction: SyncDirection) -> RepairResult<Brand> {
        let Value::Object(mut root) = deep_sanitize(input.clone()) else {
            return Err(RepairError::NotAnObject {
                found: json_kind(input),
            });
        };

        if direction == SyncDirection::Sections {
            lift_sections(&mut root);
        }

        let mut brand = clone_blueprint();
        merge_root(&mut brand, &root);
        self.force_fields(&mut brand, &root);
        brand.sections = derive_sections(&brand, &root);

        debug!(id = %brand.id, %direction, sections = brand.sections.len(), "repaired brand");
        Ok(brand)
    }

    /// Repair an already typed record
    pub fn repair_brand(&self, brand: &Brand, direction: SyncDirection) -> RepairResult<Brand> {
        let value = serde_json::to_value(brand)?;
        self.repair(&value, direction)
    }

    /// Repair an edited record and stamp it as modified now
    pub fn commit_edit(&self, input: &Value, direction: SyncDirection) -> RepairResult<Brand> {
        let mut brand = self.repair(input, direction)?;
        brand.updated_at = (self.clock)();
        Ok(brand)
    }

    /// New brand from the blueprint, already repaired
    #[must_use]
    pub fn create_brand(&self) -> Brand {
        let mut brand = clone_blueprint();
        brand.version = SCHEMA_VERSION.to_string();
        brand.updated_at = (self.clock)();
        brand
    }

    fn force_fields(&self, brand: &mut Brand, root: &Map<String, Value>) {
        if let Some(id) = take::<String>(root, "id").filter(|id| is_present(id)) {
            brand.id = id;
        }
        brand.version = SCHEMA_VERSION.to_string();
        brand.updated_at = take::<i64>(root, "updatedAt")
            .filter(|millis| *millis > 0)
            .unwrap_or_else(self.clock);
    }
}

/// One section per canonical descriptor, data projected from the root
///
/// Presentation overrides come from the first input section of the same
/// type: non-empty `id`, `title` and `description`, and any `isVisible` or
/// `order` it carries.
fn derive_sections(brand: &Brand, root: &Map<String, Value>) -> Vec<BrandSection> {
    let incoming = root
        .get("sections")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut sections: Vec<BrandSection> = CANONICAL_SECTIONS
        .iter()
        .map(|descriptor| {
            let saved = incoming.iter().find(|section| {
                section.get("type").and_then(Value::as_str) == Some(descriptor.kind.as_str())
            });
            derive_section(descriptor, brand, saved)
        })
        .collect();

    sort_sections(&mut sections);
    sections
}

fn derive_section(descriptor: &SectionDescriptor, brand: &Brand, saved: Option<&Value>) -> BrandSection {
    let mut section = descriptor.to_section(brand);
    let Some(saved) = saved else {
        return section;
    };

    if let Some(id) = non_empty_str(saved, "id") {
        section.id = id.to_string();
    }
    if let Some(title) = non_empty_str(saved, "title") {
        section.title = title.to_string();
    }
    if let Some(description) = non_empty_str(saved, "description") {
        section.description = Some(description.to_string());
    }
    if let Some(visible) = saved.get("isVisible").and_then(Value::as_bool) {
        section.is_visible = visible;
    }
    if let Some(order) = saved.get("order").and_then(order_value) {
        section.order = order;
    }
    section
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[allow(clippy::cast_possible_truncation)]
fn order_value(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Repair with the system clock
pub fn repair(input: &Value, direction: SyncDirection) -> RepairResult<Brand> {
    Reconciler::default().repair(input, direction)
}

/// Repair a typed record with the system clock
pub fn repair_brand(brand: &Brand, direction: SyncDirection) -> RepairResult<Brand> {
    Reconciler::default().repair_brand(brand, direction)
}

/// Repair an edit and stamp it with the current time
pub fn commit_edit(input: &Value, direction: SyncDirection) -> RepairResult<Brand> {
    Reconciler::default().commit_edit(input, direction)
}

/// Fresh brand built from the blueprint
#[must_use]
pub fn create_brand() -> Brand {
    Reconciler::default().create_brand()
}
