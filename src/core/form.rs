/// Whether the contact form's submit control accepts clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Enabled,
    Disabled,
}

impl SubmitState {
    /// Enabled iff every field currently satisfies its constraints.
    pub fn from_validity<I: IntoIterator<Item = bool>>(fields: I) -> Self {
        if fields.into_iter().all(|valid| valid) {
            SubmitState::Enabled
        } else {
            SubmitState::Disabled
        }
    }

    /// Map the form-wide validity verdict onto the submit control.
    #[inline]
    pub fn from_form_validity(valid: bool) -> Self {
        Self::from_validity([valid])
    }

    pub fn is_enabled(self) -> bool {
        self == SubmitState::Enabled
    }
}
