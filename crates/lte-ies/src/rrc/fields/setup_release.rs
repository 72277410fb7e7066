/// Generic SetupRelease CHOICE, used throughout TS 36.331 for fields that can be configured
/// or torn down by a later reconfiguration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupRelease<T> {
    Release,
    Setup(T),
}

impl<T> SetupRelease<T> {
    /// Returns the setup value, if this is a Setup
    pub fn setup(&self) -> Option<&T> {
        match self {
            SetupRelease::Setup(v) => Some(v),
            SetupRelease::Release => None,
        }
    }

    pub fn is_setup(&self) -> bool {
        matches!(self, SetupRelease::Setup(_))
    }
}
