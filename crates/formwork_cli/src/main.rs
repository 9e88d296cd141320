//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `formwork_core` linkage without the Flutter/FFI runtime.
//! - Print the organism, field list and payload of a small demo form.

use formwork_core::{init_logging_from_config, CoreConfig, FormSession, MoleculeKind};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("formwork_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    init_logging_from_config(&config)?;

    println!("formwork_core version={}", formwork_core::core_version());

    let mut session = FormSession::new(&config);
    session.rename("Demo");

    let name = session.add_molecule(MoleculeKind::Text);
    let age = session.add_molecule(MoleculeKind::Number);
    session.add_molecule(MoleculeKind::Date);
    let consent = session.add_molecule(MoleculeKind::YesNo);

    set_prompt(&mut session, name.as_str(), "Name?")?;
    set_prompt(&mut session, age.as_str(), "Age?")?;
    set_prompt(&mut session, consent.as_str(), "Subscribe?")?;
    session.duplicate_molecule(name.as_str())?;

    session.edit_field_value(age.as_str(), "31")?;
    session.edit_field_value(consent.as_str(), "yes")?;

    let snapshot = session.snapshot();
    println!("organism:\n{}", snapshot.organism_json_pretty()?);
    println!("formFields:\n{}", snapshot.fields_json_pretty()?);
    println!("payload:\n{}", snapshot.payload_json_pretty()?);
    for row in snapshot.payload_rows() {
        println!("{}: {}", row.label, row.value);
    }
    Ok(())
}

fn set_prompt(
    session: &mut FormSession,
    molecule_id: &str,
    prompt: &str,
) -> Result<(), Box<dyn Error>> {
    let atom_id = session
        .organism()
        .molecule(molecule_id)
        .and_then(|molecule| {
            molecule
                .atoms
                .iter()
                .find(|atom| atom.role == formwork_core::AtomRole::Prompt)
        })
        .map(|atom| atom.id.to_string())
        .ok_or_else(|| format!("no prompt atom on {molecule_id}"))?;
    session.edit_atom(molecule_id, &atom_id, prompt)?;
    Ok(())
}
