//! MAT-file 5 reader for MATPOWER case payloads.
//!
//! Decodes the subset of the format that MATLAB uses when saving case
//! data: numeric matrices (any integer packing), character arrays, scalar
//! structs and zlib compressed elements. Cell arrays, sparse matrices and
//! objects never occur in case files and are skipped.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;

use crate::dense::Mat;
use crate::error::ReadError;

/// A single decoded MAT-file variable.
#[derive(Debug, Clone, PartialEq)]
pub enum MatValue {
    /// Dense numeric matrix, widened to `f64`.
    Numeric(Mat),
    /// Character array.
    Char(String),
    /// Scalar (1x1) struct with named fields.
    Struct(HashMap<String, MatValue>),
}

impl MatValue {
    /// Returns the value of a 1x1 numeric matrix.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MatValue::Numeric(m) if m.shape() == (1, 1) => Some(m.get(0, 0)),
            _ => None,
        }
    }
}

// MAT-file data element types.
const MI_INT8: u32 = 1;
const MI_UINT8: u32 = 2;
const MI_INT16: u32 = 3;
const MI_UINT16: u32 = 4;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_SINGLE: u32 = 7;
const MI_DOUBLE: u32 = 9;
const MI_INT64: u32 = 12;
const MI_UINT64: u32 = 13;
const MI_MATRIX: u32 = 14;
const MI_COMPRESSED: u32 = 15;
const MI_UTF8: u32 = 16;
const MI_UTF16: u32 = 17;

// Array classes stored in the array-flags sub-element.
const MX_STRUCT: u32 = 2;
const MX_CHAR: u32 = 4;
const MX_DOUBLE: u32 = 6;
const MX_UINT64: u32 = 15;

const HEADER_LEN: usize = 128;

/// Reads all variables from a MAT-file on disk.
pub fn read_mat_file(path: &Path) -> Result<HashMap<String, MatValue>, ReadError> {
    let data = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io(e)
        }
    })?;
    parse_mat(&data)
}

/// Parses an in-memory MAT-file payload.
pub fn parse_mat(data: &[u8]) -> Result<HashMap<String, MatValue>, ReadError> {
    validate_header(data)?;

    let mut vars = HashMap::new();
    let mut offset = HEADER_LEN;
    while offset < data.len() {
        let (element, next) = read_element(data, offset)?;
        match element.dtype {
            MI_MATRIX => {
                if let Some((name, value)) = parse_matrix(element.data)? {
                    vars.insert(name, value);
                }
            }
            MI_COMPRESSED => {
                let inflated = inflate(element.data)?;
                let (inner, _) = read_element(&inflated, 0)?;
                if inner.dtype == MI_MATRIX {
                    if let Some((name, value)) = parse_matrix(inner.data)? {
                        vars.insert(name, value);
                    }
                }
            }
            other => {
                log::debug!("skipping top level element of type {}", other);
            }
        }
        offset = next;
    }
    Ok(vars)
}

fn validate_header(data: &[u8]) -> Result<(), ReadError> {
    if data.len() < HEADER_LEN {
        return Err(ReadError::invalid_header("file too small"));
    }
    // The endian indicator reads "IM" when the writer was little-endian.
    match &data[126..128] {
        b"IM" => {}
        b"MI" => {
            return Err(ReadError::unsupported("big-endian MAT-file"));
        }
        _ => {
            return Err(ReadError::invalid_header("missing endian indicator"));
        }
    }
    if data[124..126] != [0x00, 0x01] {
        return Err(ReadError::invalid_header(format!(
            "unsupported version 0x{:02x}{:02x}",
            data[125], data[124]
        )));
    }
    Ok(())
}

#[derive(Debug)]
struct Element<'a> {
    dtype: u32,
    data: &'a [u8],
}

/// Reads one tagged data element, returning it together with the offset of
/// the next element.
fn read_element(data: &[u8], offset: usize) -> Result<(Element<'_>, usize), ReadError> {
    let tag = read_u32(data, offset)?;
    if tag >> 16 != 0 {
        // Small data element: type and byte count share the tag word and
        // the payload lives in the remaining four tag bytes.
        let dtype = tag & 0xffff;
        let len = (tag >> 16) as usize;
        let payload = take(data, offset + 4, len)?;
        return Ok((Element { dtype, data: payload }, offset + 8));
    }

    let len = read_u32(data, offset + 4)? as usize;
    let payload = take(data, offset + 8, len)?;
    let end = offset + 8 + len;
    // Compressed elements are written back to back; everything else is
    // padded to a 64-bit boundary.
    let next = if tag == MI_COMPRESSED { end } else { align8(end) };
    Ok((Element { dtype: tag, data: payload }, next))
}

fn parse_matrix(data: &[u8]) -> Result<Option<(String, MatValue)>, ReadError> {
    let (flags, offset) = read_element(data, 0)?;
    if flags.dtype != MI_UINT32 || flags.data.len() < 4 {
        return Err(ReadError::malformed_element("bad array flags"));
    }
    let class = read_u32(flags.data, 0)? & 0xff;

    let (dims, offset) = {
        let (el, next) = read_element(data, offset)?;
        (parse_dims(&el)?, next)
    };

    let (name_el, offset) = read_element(data, offset)?;
    let name = String::from_utf8_lossy(name_el.data)
        .trim_end_matches('\0')
        .to_string();

    let value = match class {
        // All numeric classes, mxDOUBLE through mxUINT64.
        MX_DOUBLE..=MX_UINT64 => {
            let (pr, _) = read_element(data, offset)?;
            let values = widen_numeric(&pr)?;
            let mat = Mat::new(dims.0, dims.1)
                .col_major()
                .values(values)
                .build()
                .map_err(|e| ReadError::malformed_element(e.to_string()))?;
            Some(MatValue::Numeric(mat))
        }
        MX_CHAR => {
            let (text, _) = read_element(data, offset)?;
            Some(MatValue::Char(decode_char(&text)?))
        }
        MX_STRUCT => Some(parse_struct(data, offset, dims)?),
        other => {
            log::debug!("skipping array '{}' of unsupported class {}", name, other);
            None
        }
    };
    Ok(value.map(|v| (name, v)))
}

fn parse_dims(el: &Element) -> Result<(usize, usize), ReadError> {
    if el.dtype != MI_INT32 {
        return Err(ReadError::malformed_element("dimensions must be miINT32"));
    }
    let n = el.data.len() / 4;
    if n != 2 {
        return Err(ReadError::unsupported(format!("{}-dimensional array", n)));
    }
    let rows = read_u32(el.data, 0)? as usize;
    let cols = read_u32(el.data, 4)? as usize;
    Ok((rows, cols))
}

fn parse_struct(
    data: &[u8],
    offset: usize,
    dims: (usize, usize),
) -> Result<MatValue, ReadError> {
    if dims != (1, 1) {
        return Err(ReadError::unsupported(format!(
            "{}x{} struct array",
            dims.0, dims.1
        )));
    }

    let (len_el, offset) = read_element(data, offset)?;
    let name_len = read_u32(len_el.data, 0)? as usize;
    if name_len == 0 {
        return Err(ReadError::malformed_element("zero struct field name length"));
    }

    let (names_el, mut offset) = read_element(data, offset)?;
    let mut names = Vec::with_capacity(names_el.data.len() / name_len);
    for chunk in names_el.data.chunks_exact(name_len) {
        let end = chunk.iter().position(|&b| b == 0).unwrap_or(name_len);
        names.push(String::from_utf8_lossy(&chunk[..end]).to_string());
    }

    let mut fields = HashMap::with_capacity(names.len());
    for field in names {
        let (el, next) = read_element(data, offset)?;
        if el.dtype != MI_MATRIX {
            return Err(ReadError::malformed_element(format!(
                "struct field '{}' is not a matrix element",
                field
            )));
        }
        if let Some((_, value)) = parse_matrix(el.data)? {
            fields.insert(field, value);
        }
        offset = next;
    }
    Ok(MatValue::Struct(fields))
}

/// Widens numeric element data to `f64`. MATLAB stores double arrays with
/// the narrowest integer type the values fit in, so every packing must be
/// accepted.
fn widen_numeric(el: &Element) -> Result<Vec<f64>, ReadError> {
    let data = el.data;
    let values = match el.dtype {
        MI_DOUBLE => data
            .chunks_exact(8)
            .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
            .collect(),
        MI_SINGLE => data
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f64)
            .collect(),
        MI_INT8 => data.iter().map(|&b| b as i8 as f64).collect(),
        MI_UINT8 => data.iter().map(|&b| b as f64).collect(),
        MI_INT16 => data
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]) as f64)
            .collect(),
        MI_UINT16 => data
            .chunks_exact(2)
            .map(|b| u16::from_le_bytes([b[0], b[1]]) as f64)
            .collect(),
        MI_INT32 => data
            .chunks_exact(4)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f64)
            .collect(),
        MI_UINT32 => data
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f64)
            .collect(),
        MI_INT64 => data
            .chunks_exact(8)
            .map(|b| i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f64)
            .collect(),
        MI_UINT64 => data
            .chunks_exact(8)
            .map(|b| u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f64)
            .collect(),
        other => {
            return Err(ReadError::unsupported(format!(
                "numeric data of type {}",
                other
            )));
        }
    };
    Ok(values)
}

fn decode_char(el: &Element) -> Result<String, ReadError> {
    match el.dtype {
        MI_UTF8 | MI_INT8 | MI_UINT8 => Ok(String::from_utf8_lossy(el.data).to_string()),
        MI_UINT16 | MI_UTF16 => {
            let mut text = String::with_capacity(el.data.len() / 2);
            for pair in el.data.chunks_exact(2) {
                let code = u16::from_le_bytes([pair[0], pair[1]]);
                text.push(char::from_u32(code as u32).unwrap_or('\u{fffd}'));
            }
            Ok(text)
        }
        other => Err(ReadError::unsupported(format!(
            "character data of type {}",
            other
        ))),
    }
}

fn inflate(data: &[u8]) -> Result<Vec<u8>, ReadError> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(ReadError::Inflate)?;
    Ok(out)
}

fn take(data: &[u8], offset: usize, len: usize) -> Result<&[u8], ReadError> {
    data.get(offset..offset + len)
        .ok_or(ReadError::UnexpectedEof { offset })
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, ReadError> {
    let bytes = take(data, offset, 4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn align8(n: usize) -> usize {
    (n + 7) & !7
}
