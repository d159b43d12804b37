use validator::ValidationErrors;

const FALLBACK_MESSAGE: &str = "Invalid form data.";

/// Picks one user-facing message out of a set of field errors.
///
/// Fields are visited in name order so the same form always yields the
/// same message.
pub fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .flat_map(|field| field_errors[field].iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
