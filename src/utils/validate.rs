use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 去除首尾空白后不能为空
pub fn validate_required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err(message);
    }
    Ok(())
}

/// 补丁中的可选字段，只在出现时校验
pub fn validate_optional(value: Option<&str>, message: &'static str) -> Result<(), &'static str> {
    match value {
        Some(v) => validate_required(v, message),
        None => Ok(()),
    }
}
