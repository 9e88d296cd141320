use crate::model::field::{FieldDescriptor, FieldType};
use crate::model::id::parse_id;
use crate::model::organism::Organism;
use crate::model::payload::Payload;
use crate::model::value::FieldValue;

/// Assembles the output payload from the latest field descriptors.
///
/// Returns an empty payload when either input is absent.
pub fn build_payload(organism: Option<&Organism>, fields: Option<&[FieldDescriptor]>) -> Payload {
    let (Some(organism), Some(fields)) = (organism, fields) else {
        return Payload::default();
    };

    let mut payload = Payload::new(organism.id.clone());
    for field in fields {
        payload.insert(field.id.as_str(), coerce_payload_value(field));
    }
    payload
}

/// Coerces a descriptor value to its payload representation.
///
/// Number fields become numbers (`NaN` when blank or non-numeric); every
/// other type becomes text, with `null` mapped to the empty string.
pub fn coerce_payload_value(field: &FieldDescriptor) -> FieldValue {
    match field.field_type {
        FieldType::Number => FieldValue::Number(field.value.to_number()),
        FieldType::Text | FieldType::Range | FieldType::Date => {
            FieldValue::Text(field.value.to_text())
        }
    }
}

/// Display label for a payload key.
///
/// Uses the matching descriptor's label when non-empty, otherwise
/// `[<kind tag>]`.
pub fn key_label(key: &str, fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .find(|field| field.id == key)
        .and_then(|field| field.label.as_deref())
        .filter(|label| !label.is_empty())
        .map_or_else(|| format!("[{}]", parse_id(key)), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{build_payload, coerce_payload_value, key_label};
    use crate::model::field::{FieldDescriptor, FieldType};
    use crate::model::organism::Organism;
    use crate::model::value::FieldValue;

    fn field(id: &str, field_type: FieldType, value: FieldValue) -> FieldDescriptor {
        FieldDescriptor::seed(id.into(), field_type, value)
    }

    #[test]
    fn number_fields_become_numeric_entries() {
        let organism = Organism::new("organism-1");
        let fields = vec![field(
            "numberMolecule|x",
            FieldType::Number,
            FieldValue::text("42"),
        )];

        let payload = build_payload(Some(&organism), Some(fields.as_slice()));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "id": "organism-1", "numberMolecule|x": 42 })
        );
    }

    #[test]
    fn empty_number_becomes_nan_sentinel() {
        let value = coerce_payload_value(&field("numberMolecule|x", FieldType::Number, FieldValue::Null));
        assert!(value.to_number().is_nan());
    }

    #[test]
    fn non_number_fields_become_text() {
        let null_text = coerce_payload_value(&field("textMolecule|t", FieldType::Text, FieldValue::Null));
        assert_eq!(null_text, FieldValue::text(""));

        let range = coerce_payload_value(&field(
            "rangeMolecule|r",
            FieldType::Range,
            FieldValue::Number(3.0),
        ));
        assert_eq!(range, FieldValue::text("3"));
    }

    #[test]
    fn missing_inputs_yield_empty_payload() {
        let organism = Organism::new("organism-1");
        assert!(build_payload(Some(&organism), None).is_empty());
        assert!(build_payload(None, Some(Vec::new().as_slice())).is_empty());
        assert_eq!(
            serde_json::to_string(&build_payload(None, None)).unwrap(),
            "{}"
        );
    }

    #[test]
    fn key_label_falls_back_to_kind_tag() {
        let mut named = field("textMolecule|a", FieldType::Text, FieldValue::text(""));
        named.label = Some("Name?".to_string());
        let mut blank = field("dateMolecule|b", FieldType::Date, FieldValue::text(""));
        blank.label = Some(String::new());
        let fields = vec![named, blank];

        assert_eq!(key_label("textMolecule|a", &fields), "Name?");
        assert_eq!(key_label("dateMolecule|b", &fields), "[dateMolecule]");
        assert_eq!(key_label("numberMolecule|z|y", &fields), "[numberMolecule]");
    }
}
