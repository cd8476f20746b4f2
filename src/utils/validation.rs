use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HrError, HrResult};

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

/// Local part from the RFC 5322 dot-atom set, domain made of
/// hostname labels with at least one dot.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// Length is counted in chars so multi-byte names are measured the way users see them.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> HrResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(HrError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

pub fn check_email(value: &str) -> HrResult<()> {
    let invalid = || HrError::Validation("email is not a valid email address".to_string());

    if value.len() > EMAIL_MAX_LEN || !EMAIL_RE.is_match(value) {
        return Err(invalid());
    }

    let (local, _) = value.rsplit_once('@').ok_or_else(invalid)?;
    if local.len() > EMAIL_LOCAL_MAX_LEN
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return Err(invalid());
    }

    Ok(())
}
