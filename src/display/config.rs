use crate::utils::error::{Result, TensorError};

/// Options for rendering a tensor as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintConfig {
    /// Prefix the output with shape, rank and size lines.
    pub verbose: bool,
    /// Placed between sibling elements.
    pub separator: String,
    /// Spaces per nesting level on continuation lines.
    pub indent: usize,
    /// Rendered in place of a tensor with no elements.
    pub empty_text: String,
}

impl PrintConfig {
    pub fn build(self) -> Result<Self> {
        if self.separator.trim().is_empty() {
            return Err(TensorError::InvalidConfig(
                "Separator must contain a visible character".to_string(),
            ));
        }

        if self.indent == 0 {
            return Err(TensorError::InvalidConfig(
                "Indent must be at least one space".to_string(),
            ));
        }

        Ok(self)
    }

    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Default::default()
        }
    }

    // Separator between nested groups: the element separator without trailing whitespace
    pub(crate) fn group_separator(&self) -> &str {
        self.separator.trim_end()
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            separator: ", ".to_string(),
            indent: 1,
            empty_text: "empty array".to_string(),
        }
    }
}
