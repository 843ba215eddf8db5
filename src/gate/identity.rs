use axum::http::{HeaderMap, header};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Role
///
/// The two literal roles carried by the identity cookie. Anything else fails
/// to deserialize and therefore decodes to `Identity::Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Identity
///
/// The decoded caller identity. Produced once at the request boundary so that
/// routing and handlers never look at the raw cookie text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Present { role: Role, name: Option<String> },
    Absent,
}

impl Identity {
    pub fn role(&self) -> Option<Role> {
        match self {
            Identity::Present { role, .. } => Some(*role),
            Identity::Absent => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Identity::Present { name, .. } => name.as_deref(),
            Identity::Absent => None,
        }
    }
}

/// IdentityError
///
/// Why a cookie value was rejected. Never leaves this module's callers: the gate
/// logs it and falls back to `Identity::Absent`.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("malformed percent escape at byte {0}")]
    Escape(usize),
    #[error("decoded cookie is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("cookie is not an identity record: {0}")]
    Record(#[from] serde_json::Error),
}

// Wire shape of the cookie payload. Only `role` is required; the rest is kept
// loosely so that unexpected extra fields don't invalidate an otherwise good record.
#[derive(Deserialize)]
struct IdentityRecord {
    role: Role,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// decode_identity
///
/// Turns the raw cookie value into an `Identity`. Missing, undecodable and
/// unparsable values all collapse to `Identity::Absent`.
pub fn decode_identity(raw: Option<&str>) -> Identity {
    let Some(raw) = raw else {
        return Identity::Absent;
    };

    match parse_identity(raw) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::debug!(error = %err, "discarding identity cookie");
            Identity::Absent
        }
    }
}

/// parse_identity
///
/// The fallible half of `decode_identity`: percent-decode, then parse the JSON record.
pub fn parse_identity(raw: &str) -> Result<Identity, IdentityError> {
    let text = percent_decode(raw)?;
    let record: IdentityRecord = serde_json::from_str(&text)?;

    let name = record
        .extra
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Identity::Present {
        role: record.role,
        name,
    })
}

/// percent_decode
///
/// Strict `%XX` decoding. A `%` that is not followed by two hex digits is an
/// error rather than being passed through, and `+` stays a literal plus.
pub fn percent_decode(input: &str) -> Result<String, IdentityError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).and_then(|b| hex_value(*b));
            let lo = bytes.get(i + 2).and_then(|b| hex_value(*b));
            match (hi, lo) {
                (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
                _ => return Err(IdentityError::Escape(i)),
            }
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    Ok(String::from_utf8(out)?)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// read_cookie
///
/// Finds the first cookie called `name` across all `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == name).then(|| val.trim())
        })
}
