//! UI library selection and its lookup table

use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// Supported UI libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLibrary {
    Shadcn,
    Flowbite,
    DaisyUi,
    FlowbiteReact,
}

/// What a UI library contributes to the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLibraryEntry {
    /// Identifier shown in the prompt and accepted by `FromStr`
    pub id: &'static str,
    /// Source text registered in the Tailwind `plugins` list (may be empty)
    pub plugin: &'static str,
    /// Package specifier handed to the package manager
    pub package: &'static str,
}

const SHADCN: UiLibraryEntry = UiLibraryEntry {
    id: "shadcn",
    plugin: "",
    package: "@shadcn/ui@latest",
};

const FLOWBITE: UiLibraryEntry = UiLibraryEntry {
    id: "flowbite",
    plugin: "require('flowbite/plugin')",
    package: "flowbite@latest",
};

const DAISYUI: UiLibraryEntry = UiLibraryEntry {
    id: "daisyui",
    plugin: "require('daisyui')",
    package: "daisyui@latest",
};

const FLOWBITE_REACT: UiLibraryEntry = UiLibraryEntry {
    id: "flowbite-react",
    plugin: "",
    package: "flowbite-react@latest",
};

impl UiLibrary {
    /// All libraries, in prompt order
    pub const ALL: [UiLibrary; 4] = [
        UiLibrary::Shadcn,
        UiLibrary::Flowbite,
        UiLibrary::DaisyUi,
        UiLibrary::FlowbiteReact,
    ];

    pub const fn entry(self) -> &'static UiLibraryEntry {
        match self {
            UiLibrary::Shadcn => &SHADCN,
            UiLibrary::Flowbite => &FLOWBITE,
            UiLibrary::DaisyUi => &DAISYUI,
            UiLibrary::FlowbiteReact => &FLOWBITE_REACT,
        }
    }

    pub fn id(self) -> &'static str {
        self.entry().id
    }

    pub fn plugin(self) -> &'static str {
        self.entry().plugin
    }

    pub fn package(self) -> &'static str {
        self.entry().package
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for UiLibrary {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        UiLibrary::ALL
            .into_iter()
            .find(|lib| lib.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScaffoldError::UnknownUiLibrary(s.to_string()))
    }
}
