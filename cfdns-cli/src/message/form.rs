//! Add-record form fields
//!
//! Each parser takes one raw line as typed. Name and content are passed through
//! exactly as typed; Cloudflare validates them.

use cfdns_provider::DnsRecordType;

use crate::error::InputError;

/// Typed at the record type prompt to leave the form.
pub fn is_back(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "b" | "back")
}

/// Record type by its number in [`DnsRecordType::ALL`] (1-based) or by name.
///
/// `Ok(None)` means the user backed out.
pub fn parse_record_type(input: &str) -> Result<Option<DnsRecordType>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty("record type"));
    }
    if is_back(input) {
        return Ok(None);
    }

    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| DnsRecordType::ALL.get(i))
            .copied()
            .map(Some)
            .ok_or_else(|| InputError::UnknownRecordType(input.to_string()));
    }

    DnsRecordType::parse(input, "input")
        .map(Some)
        .map_err(|_| InputError::UnknownRecordType(input.to_string()))
}

pub fn parse_required(input: &str, field: &'static str) -> Result<String, InputError> {
    if input.trim().is_empty() {
        Err(InputError::Empty(field))
    } else {
        Ok(input.to_string())
    }
}

/// Blank means `default`. `1` is Cloudflare's "automatic".
pub fn parse_ttl(input: &str, default: u32) -> Result<u32, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    match input.parse::<u32>() {
        Ok(0) | Err(_) => Err(InputError::InvalidTtl(input.to_string())),
        Ok(ttl) => Ok(ttl),
    }
}

/// Blank means no priority.
pub fn parse_priority(input: &str) -> Result<Option<u16>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| InputError::InvalidPriority(input.to_string()))
}

/// `y`/`yes`/`true` and `n`/`no`/`false`, any case; blank means no.
pub fn parse_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "" | "n" | "no" | "false" => Ok(false),
        _ => Err(InputError::InvalidYesNo(input.trim().to_string())),
    }
}
