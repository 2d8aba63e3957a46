/// Settings for building a [`Diff`](crate::Diff) out of composite input.
///
/// The default splits on `'\n'` and lets containment merge edited lines
/// into replace pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub separator: char,
    pub containment: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// When disabled, elements only ever align on exact equality.
    pub fn with_containment(mut self, containment: bool) -> Self {
        self.containment = containment;
        self
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            separator: '\n',
            containment: true,
        }
    }
}
