/// One parsed line of an animation script.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// Fade the object in, starting at the current cursor.
    Show {
        /// Raw object id, without any selector prefix.
        object_id: String,
    },
    /// Fade the object out, starting at the current cursor.
    Hide {
        /// Raw object id, without any selector prefix.
        object_id: String,
    },
    /// Advance the shared clock.
    Wait {
        /// Duration in milliseconds.
        duration_ms: u64,
    },
}

impl Instruction {
    /// Build a [`Instruction::Show`].
    pub fn show(object_id: impl Into<String>) -> Self {
        Self::Show {
            object_id: object_id.into(),
        }
    }

    /// Build a [`Instruction::Hide`].
    pub fn hide(object_id: impl Into<String>) -> Self {
        Self::Hide {
            object_id: object_id.into(),
        }
    }

    /// Build a [`Instruction::Wait`].
    pub fn wait(duration_ms: u64) -> Self {
        Self::Wait { duration_ms }
    }

    /// Object id for show/hide, `None` for wait.
    pub fn object_id(&self) -> Option<&str> {
        match self {
            Self::Show { object_id } | Self::Hide { object_id } => Some(object_id),
            Self::Wait { .. } => None,
        }
    }
}
