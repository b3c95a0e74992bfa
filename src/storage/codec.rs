//! Line codec for listing records
//!
//! One record per line, seven pipe-delimited fields:
//! `name|address|price|size|rooms|bathrooms|parking`. Numeric fields are
//! plain decimal integers, parking is `0` or `1`, and name/address are
//! capped at their storage widths. A `|` can never appear inside
//! name/address, since input validation restricts them to letters,
//! digits, and spaces.

use thiserror::Error;

use crate::domain::{Property, ADDRESS_MAX, NAME_MAX};

/// Number of pipe-delimited fields in a record line.
const FIELD_COUNT: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

fn malformed(reason: impl Into<String>) -> CodecError {
    CodecError::MalformedRecord(reason.into())
}

/// Parses one line of a listing file into a [`Property`].
///
/// Only structural checks apply here: field count, storage widths, and
/// numeric fields that parse. Name/address shape is validated when a
/// listing is added, not when it is loaded.
pub fn parse_line(line: &str) -> Result<Property, CodecError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, got {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let name = fields[0];
    if name.is_empty() || name.len() > NAME_MAX {
        return Err(malformed(format!("name must be 1-{} bytes", NAME_MAX)));
    }

    let address = fields[1];
    if address.is_empty() || address.len() > ADDRESS_MAX {
        return Err(malformed(format!("address must be 1-{} bytes", ADDRESS_MAX)));
    }

    Ok(Property {
        name: name.to_string(),
        address: address.to_string(),
        price: parse_number(fields[2], "price")?,
        size: parse_number(fields[3], "size")?,
        rooms: parse_number(fields[4], "rooms")?,
        bathrooms: parse_number(fields[5], "bathrooms")?,
        parking: parse_flag(fields[6])?,
    })
}

fn parse_number(field: &str, what: &str) -> Result<u32, CodecError> {
    field
        .parse()
        .map_err(|_| malformed(format!("non-numeric {}: '{}'", what, field)))
}

fn parse_flag(field: &str) -> Result<bool, CodecError> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(malformed(format!("parking must be 0 or 1, got '{}'", other))),
    }
}

/// Serializes a [`Property`] to its line form, without trailing newline.
pub fn serialize(property: &Property) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}",
        property.name,
        property.address,
        property.price,
        property.size,
        property.rooms,
        property.bathrooms,
        u8::from(property.parking),
    )
}
