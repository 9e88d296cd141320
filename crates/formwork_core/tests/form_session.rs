use chrono::NaiveDate;
use formwork_core::{
    parse_id, FieldValue, FixedClock, FormSession, MoleculeKind, SessionError,
};

fn session() -> FormSession {
    let mut counter = 0;
    FormSession::with_parts(
        "organism-1",
        move || {
            counter += 1;
            format!("k{counter}")
        },
        FixedClock(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()),
    )
}

fn molecule_ids(session: &FormSession) -> Vec<String> {
    session
        .organism()
        .molecules
        .iter()
        .map(|molecule| molecule.id.to_string())
        .collect()
}

#[test]
fn add_appends_and_derives_fields_and_payload() {
    let mut session = session();
    let text = session.add_molecule(MoleculeKind::Text);
    let number = session.add_molecule_by_tag("numberMolecule").unwrap();

    assert_eq!(text, "textMolecule|k1");
    assert_eq!(number, "numberMolecule|k2");
    assert_eq!(session.fields().len(), 2);

    let payload = serde_json::to_value(session.payload()).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({
            "id": "organism-1",
            "textMolecule|k1": "",
            "numberMolecule|k2": null
        })
    );
}

#[test]
fn add_by_unknown_tag_is_rejected() {
    let mut session = session();
    let err = session.add_molecule_by_tag("checkboxMolecule").unwrap_err();
    assert_eq!(
        err,
        SessionError::UnknownMoleculeType("checkboxMolecule".to_string())
    );
    assert!(session.organism().molecules.is_empty());
}

#[test]
fn edit_atom_updates_derived_field() {
    let mut session = session();
    let id = session.add_molecule(MoleculeKind::Range);

    session
        .edit_atom(id.as_str(), "promptAtom|k1", "Rate us")
        .unwrap();
    session.edit_atom(id.as_str(), "maxAtom|k1", "10").unwrap();

    let field = &session.fields()[0];
    assert_eq!(field.label.as_deref(), Some("Rate us"));
    assert_eq!(field.max, Some(FieldValue::text("10")));
}

#[test]
fn edit_atom_reports_missing_targets() {
    let mut session = session();
    let id = session.add_molecule(MoleculeKind::Date);

    assert_eq!(
        session.edit_atom("dateMolecule|nope", "promptAtom|k1", "x"),
        Err(SessionError::MoleculeNotFound("dateMolecule|nope".to_string()))
    );
    assert_eq!(
        session.edit_atom(id.as_str(), "minAtom|k1", "x"),
        Err(SessionError::AtomNotFound {
            molecule_id: id.to_string(),
            atom_id: "minAtom|k1".to_string(),
        })
    );
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let mut session = session();
    session.add_molecule(MoleculeKind::Text);
    let middle = session.add_molecule(MoleculeKind::Number);
    session.add_molecule(MoleculeKind::Date);

    let removed = session.delete_molecule(middle.as_str()).unwrap();
    assert_eq!(removed.id, middle);
    assert_eq!(
        molecule_ids(&session),
        vec!["textMolecule|k1", "dateMolecule|k3"]
    );
    assert_eq!(session.payload().len(), 2);
    assert!(session.payload().get(middle.as_str()).is_none());

    assert_eq!(
        session.delete_molecule(middle.as_str()).unwrap_err(),
        SessionError::MoleculeNotFound(middle.to_string())
    );
}

#[test]
fn duplicate_copies_values_under_fresh_ids() {
    let mut session = session();
    let source = session.add_molecule(MoleculeKind::Range);
    session
        .edit_atom(source.as_str(), "promptAtom|k1", "How much?")
        .unwrap();
    let before = session.snapshot();

    let copy_id = session.duplicate_molecule(source.as_str()).unwrap();
    assert_eq!(copy_id, "rangeMolecule|k1|k2");
    assert_eq!(parse_id(copy_id.as_str()), "rangeMolecule");

    let original = &session.organism().molecules[0];
    let copy = &session.organism().molecules[1];
    assert_eq!(original, &before.organism.molecules[0]);
    assert_ne!(original.id, copy.id);
    assert_eq!(original.label, copy.label);
    for (left, right) in original.atoms.iter().zip(&copy.atoms) {
        assert_ne!(left.id, right.id);
        assert_eq!(left.value, right.value);
        assert_eq!(right.id.as_str(), format!("{}|k2", left.id));
    }
    assert_eq!(session.fields()[1].label.as_deref(), Some("How much?"));
}

#[test]
fn duplicating_a_copy_keeps_chaining_suffixes() {
    let mut session = session();
    let source = session.add_molecule(MoleculeKind::YesNo);
    let copy = session.duplicate_molecule(source.as_str()).unwrap();
    let copy_of_copy = session.duplicate_molecule(copy.as_str()).unwrap();

    assert_eq!(copy_of_copy, "yesnoMolecule|k1|k2|k3");
    assert_eq!(copy_of_copy.base(), "yesnoMolecule");
    assert_eq!(
        session.organism().molecules[2].atoms[0].id,
        "promptAtom|k1|k2|k3"
    );
}

#[test]
fn field_value_edits_reach_payload_but_not_molecules() {
    let mut session = session();
    let number = session.add_molecule(MoleculeKind::Number);
    let yesno = session.add_molecule(MoleculeKind::YesNo);

    session.edit_field_value(number.as_str(), "42").unwrap();
    session.edit_field_value(yesno.as_str(), "yes").unwrap();

    assert_eq!(
        session.payload().get(number.as_str()),
        Some(&FieldValue::Number(42.0))
    );
    assert_eq!(
        session.payload().get(yesno.as_str()),
        Some(&FieldValue::text("yes"))
    );
    assert!(session
        .organism()
        .molecules
        .iter()
        .flat_map(|molecule| &molecule.atoms)
        .all(|atom| atom.value != FieldValue::text("42")));
}

#[test]
fn organism_mutation_discards_preview_edits() {
    let mut session = session();
    let number = session.add_molecule(MoleculeKind::Number);
    session.edit_field_value(number.as_str(), "7").unwrap();

    session
        .edit_atom(number.as_str(), "promptAtom|k1", "Age")
        .unwrap();

    assert_eq!(session.fields()[0].value, FieldValue::Null);
    assert!(session
        .payload()
        .get(number.as_str())
        .is_some_and(|value| value.to_number().is_nan()));
}

#[test]
fn edit_field_value_reports_unknown_field() {
    let mut session = session();
    assert_eq!(
        session.edit_field_value("textMolecule|zzz", "x"),
        Err(SessionError::FieldNotFound("textMolecule|zzz".to_string()))
    );
}

#[test]
fn rename_updates_organism_only() {
    let mut session = session();
    session.add_molecule(MoleculeKind::Text);
    session.rename("Signup");

    assert_eq!(session.organism().name, "Signup");
    assert_eq!(session.payload().id(), Some("organism-1"));
    assert_eq!(session.payload().len(), 1);
}

#[test]
fn snapshot_documents_render_as_pretty_json() {
    let mut session = session();
    let text = session.add_molecule(MoleculeKind::Text);
    session
        .edit_atom(text.as_str(), "promptAtom|k1", "Name?")
        .unwrap();
    session.add_molecule(MoleculeKind::Date);
    let snapshot = session.snapshot();

    let organism = snapshot.organism_json_pretty().unwrap();
    assert!(organism.contains("\"id\": \"organism-1\""));
    assert!(organism.contains('\n'));

    let fields = snapshot.fields_json_pretty().unwrap();
    assert!(fields.contains("\"value\": \"2024-05-20\""));

    let payload: serde_json::Value =
        serde_json::from_str(&snapshot.payload_json_pretty().unwrap()).unwrap();
    assert_eq!(payload["dateMolecule|k2"], "2024-05-20");

    let rows = snapshot.payload_rows();
    assert_eq!(rows[0].label, "Name?");
    assert_eq!(rows[1].label, "[dateMolecule]");
    assert_eq!(rows[1].value, "2024-05-20");
}
