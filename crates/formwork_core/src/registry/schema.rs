//! Fixed atom schema per molecule kind and the `build` entry point.

use crate::model::atom::{Atom, AtomRole, InputKind};
use crate::model::id::CompositeId;
use crate::model::molecule::{Molecule, MoleculeKind};
use crate::model::value::FieldValue;

/// Default value of a freshly built atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtomDefault {
    Text(&'static str),
    Number(f64),
}

impl AtomDefault {
    fn to_value(self) -> FieldValue {
        match self {
            AtomDefault::Text(value) => FieldValue::text(value),
            AtomDefault::Number(value) => FieldValue::Number(value),
        }
    }
}

/// Static description of one atom slot of a molecule kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomTemplate {
    pub role: AtomRole,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub default: AtomDefault,
}

impl AtomTemplate {
    /// Materializes this slot as an atom tagged with uniqueness `key`.
    pub fn instantiate(&self, key: &str) -> Atom {
        Atom {
            id: CompositeId::new(self.role.tag(), key),
            role: self.role,
            label: self.label.to_string(),
            input: self.input,
            placeholder: self.placeholder.to_string(),
            value: self.default.to_value(),
        }
    }
}

const PROMPT: AtomTemplate = AtomTemplate {
    role: AtomRole::Prompt,
    label: "Prompt",
    input: InputKind::Text,
    placeholder: "Enter Prompt",
    default: AtomDefault::Text(""),
};

const PLACEHOLDER: AtomTemplate = AtomTemplate {
    role: AtomRole::Placeholder,
    label: "Placeholder",
    input: InputKind::Text,
    placeholder: "Enter Placeholder",
    default: AtomDefault::Text(""),
};

const CHARACTER_LIMIT: AtomTemplate = AtomTemplate {
    role: AtomRole::CharacterLimit,
    label: "Character Limit",
    input: InputKind::Number,
    placeholder: "Enter Character Limit",
    default: AtomDefault::Number(100.0),
};

const fn min(default: &'static str) -> AtomTemplate {
    AtomTemplate {
        role: AtomRole::Min,
        label: "Min",
        input: InputKind::Number,
        placeholder: "Enter Min",
        default: AtomDefault::Text(default),
    }
}

const fn max(default: &'static str) -> AtomTemplate {
    AtomTemplate {
        role: AtomRole::Max,
        label: "Max",
        input: InputKind::Number,
        placeholder: "Enter Max",
        default: AtomDefault::Text(default),
    }
}

const TEXT_ATOMS: [AtomTemplate; 3] = [PROMPT, PLACEHOLDER, CHARACTER_LIMIT];
const NUMBER_ATOMS: [AtomTemplate; 3] = [PROMPT, min("0"), max("100")];
const RANGE_ATOMS: [AtomTemplate; 3] = [PROMPT, min("1"), max("5")];
const PROMPT_ONLY_ATOMS: [AtomTemplate; 1] = [PROMPT];

impl MoleculeKind {
    /// Atom slots of this kind, in display order.
    pub fn atom_templates(self) -> &'static [AtomTemplate] {
        match self {
            MoleculeKind::Text => &TEXT_ATOMS,
            MoleculeKind::Number => &NUMBER_ATOMS,
            MoleculeKind::Range => &RANGE_ATOMS,
            MoleculeKind::Date | MoleculeKind::YesNo => &PROMPT_ONLY_ATOMS,
        }
    }

    /// Builds a fresh molecule whose ids all carry uniqueness `key`.
    pub fn build(self, key: &str) -> Molecule {
        Molecule {
            id: CompositeId::new(self.tag(), key),
            kind: self,
            label: self.label().to_string(),
            atoms: self
                .atom_templates()
                .iter()
                .map(|template| template.instantiate(key))
                .collect(),
        }
    }

    /// Builds a keyless molecule for selector metadata (label, defaults).
    ///
    /// Ids are bare tags, so the result must not be added to an organism.
    pub fn template(self) -> Molecule {
        self.build("")
    }
}
