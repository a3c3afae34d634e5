//! Sanitization of validated input before it is stored or displayed.

use crate::utils::validation::{
    EmailInput, NameInput, SanitizedUserInput, ValidatedUserInput, ValidationErrors,
};

impl ValidatedUserInput {
    /// Normalizes the validated record: markup is stripped from the name and
    /// the email is lowercased.
    ///
    /// Fails when sanitizing leaves a field invalid, e.g. a name made only of
    /// tags.
    pub fn sanitize(&self) -> Result<SanitizedUserInput, ValidationErrors> {
        let name = NameInput::new(self.name());
        let email = EmailInput::new(self.email());

        match (name, email) {
            (Ok(name), Ok(email)) => Ok(SanitizedUserInput::new(name, email)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error.into()),
            (Err(name_error), Err(email_error)) => {
                let mut errors = ValidationErrors::from(name_error);
                errors.push(email_error);
                Err(errors)
            }
        }
    }
}
