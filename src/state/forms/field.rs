//! Static field definitions and the catalogs the form is built from

/// Input kind of a field. Only affects presentation; values are always
/// stored as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text,
}

impl FieldKind {
    /// Short hint shown next to the field label
    pub fn hint(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Text => "text",
        }
    }
}

/// Represents a single form field definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a numeric field
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
        }
    }

    /// Create a text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    /// Whether a value looks valid for this field's kind.
    /// Empty values are always accepted.
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            FieldKind::Text => true,
            FieldKind::Number => value.is_empty() || value.trim().parse::<f64>().is_ok(),
        }
    }
}

/// A bundle of optional fields that become visible together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub fields: &'static [FieldDescriptor],
}

/// Fields that are always visible
pub const BASE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::number("age", "Age"),
    FieldDescriptor::number("weight", "Weight (lbs)"),
    FieldDescriptor::number("height", "Height (in)"),
];

/// Groups the user can add to the form
pub const OPTIONAL_GROUPS: &[OptionalGroup] = &[
    OptionalGroup {
        key: "gender",
        label: "Gender",
        fields: &[FieldDescriptor::text("gender", "Gender")],
    },
    OptionalGroup {
        key: "goal",
        label: "Goal",
        fields: &[FieldDescriptor::text("goal", "Goals")],
    },
    OptionalGroup {
        key: "medical",
        label: "Medical condition",
        fields: &[FieldDescriptor::text("medical_condition", "Medical condition")],
    },
    OptionalGroup {
        key: "dietary",
        label: "Dietary preference",
        fields: &[FieldDescriptor::text("dietary", "Dietary preference")],
    },
];

/// Allergy tags offered as checkboxes
pub const ALLERGIES: &[&str] = &["Peanuts", "Dairy", "Gluten", "Soy", "Seafood"];

/// Look up an optional group by key
pub fn find_group(key: &str) -> Option<&'static OptionalGroup> {
    OPTIONAL_GROUPS.iter().find(|g| g.key == key)
}

/// Canonical catalog spelling of an allergy tag
pub fn find_allergy(tag: &str) -> Option<&'static str> {
    ALLERGIES.iter().copied().find(|a| *a == tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique_across_catalogs() {
        let mut seen = HashSet::new();
        for field in BASE_FIELDS
            .iter()
            .chain(OPTIONAL_GROUPS.iter().flat_map(|g| g.fields.iter()))
        {
            assert!(seen.insert(field.name), "duplicate field {}", field.name);
        }
    }

    #[test]
    fn test_group_keys_are_unique() {
        let keys: HashSet<_> = OPTIONAL_GROUPS.iter().map(|g| g.key).collect();
        assert_eq!(keys.len(), OPTIONAL_GROUPS.len());
    }

    #[test]
    fn test_every_group_has_fields() {
        assert!(OPTIONAL_GROUPS.iter().all(|g| !g.fields.is_empty()));
    }

    #[test]
    fn test_find_group() {
        assert_eq!(find_group("goal").unwrap().fields[0].name, "goal");
        assert!(find_group("unknown").is_none());
    }

    #[test]
    fn test_find_allergy_is_case_sensitive() {
        assert_eq!(find_allergy("Soy"), Some("Soy"));
        assert_eq!(find_allergy("soy"), None);
    }

    #[test]
    fn test_number_field_accepts() {
        let age = FieldDescriptor::number("age", "Age");
        assert!(age.accepts(""));
        assert!(age.accepts("34"));
        assert!(age.accepts("70.5"));
        assert!(!age.accepts("thirty"));
    }

    #[test]
    fn test_text_field_accepts_anything() {
        let goal = FieldDescriptor::text("goal", "Goals");
        assert!(goal.accepts("lose weight"));
        assert!(goal.accepts(""));
    }

    #[test]
    fn test_kind_hint() {
        assert_eq!(FieldKind::Number.hint(), "number");
        assert_eq!(FieldKind::Text.hint(), "text");
    }
}
