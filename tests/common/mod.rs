//! Minimal MAT-file 5 writer used to synthesize test fixtures.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

// Data element types and array classes used by the fixtures.
const MI_INT8: u32 = 1;
const MI_INT16: u32 = 3;
const MI_UINT16: u32 = 4;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;
const MI_COMPRESSED: u32 = 15;
const MX_STRUCT: u32 = 2;
const MX_CHAR: u32 = 4;
const MX_DOUBLE: u32 = 6;

const FIELD_NAME_LEN: usize = 32;

pub fn mat_file(elements: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![b' '; 128];
    data[..33].copy_from_slice(b"MATLAB 5.0 MAT-file, test fixture");
    data[124] = 0x00;
    data[125] = 0x01;
    data[126] = b'I';
    data[127] = b'M';
    for el in elements {
        data.extend_from_slice(el);
    }
    data
}

/// A tagged data element, padded to a 64-bit boundary.
pub fn element(dtype: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len() + 7);
    out.extend_from_slice(&dtype.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    while out.len() % 8 != 0 {
        out.push(0);
    }
    out
}

/// Wraps an already serialized element into a zlib compressed element.
pub fn compressed(element_bytes: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(element_bytes).unwrap();
    let payload = encoder.finish().unwrap();

    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(&MI_COMPRESSED.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

fn matrix_element(name: &str, class: u32, rows: usize, cols: usize, data_el: &[u8]) -> Vec<u8> {
    let mut flags = Vec::with_capacity(8);
    flags.extend_from_slice(&class.to_le_bytes());
    flags.extend_from_slice(&0u32.to_le_bytes());

    let mut dims = Vec::with_capacity(8);
    dims.extend_from_slice(&(rows as i32).to_le_bytes());
    dims.extend_from_slice(&(cols as i32).to_le_bytes());

    let mut body = Vec::new();
    body.extend_from_slice(&element(MI_UINT32, &flags));
    body.extend_from_slice(&element(MI_INT32, &dims));
    body.extend_from_slice(&element(MI_INT8, name.as_bytes()));
    body.extend_from_slice(data_el);
    element(MI_MATRIX, &body)
}

/// A dense double matrix from row literals, stored column-major.
pub fn numeric_matrix(name: &str, rows: &[Vec<f64>]) -> Vec<u8> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    let mut payload = Vec::with_capacity(nrows * ncols * 8);
    for c in 0..ncols {
        for r in 0..nrows {
            payload.extend_from_slice(&rows[r][c].to_le_bytes());
        }
    }
    matrix_element(name, MX_DOUBLE, nrows, ncols, &element(MI_DOUBLE, &payload))
}

/// A double matrix with its values packed as miINT16, the disk layout
/// MATLAB uses for integer-valued doubles.
pub fn numeric_matrix_i16(name: &str, rows: &[Vec<f64>]) -> Vec<u8> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    let mut payload = Vec::with_capacity(nrows * ncols * 2);
    for c in 0..ncols {
        for r in 0..nrows {
            payload.extend_from_slice(&(rows[r][c] as i16).to_le_bytes());
        }
    }
    matrix_element(name, MX_DOUBLE, nrows, ncols, &element(MI_INT16, &payload))
}

pub fn scalar(name: &str, value: f64) -> Vec<u8> {
    numeric_matrix(name, &[vec![value]])
}

/// A char array holding `text`, stored as UTF-16 code units.
pub fn char_matrix(name: &str, text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut payload = Vec::with_capacity(units.len() * 2);
    for unit in &units {
        payload.extend_from_slice(&unit.to_le_bytes());
    }
    matrix_element(name, MX_CHAR, 1, units.len(), &element(MI_UINT16, &payload))
}

/// A 1x1 struct whose fields are the given serialized matrix elements.
pub fn struct_matrix(name: &str, fields: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut names = Vec::with_capacity(fields.len() * FIELD_NAME_LEN);
    for (field_name, _) in fields {
        let mut padded = vec![0u8; FIELD_NAME_LEN];
        padded[..field_name.len()].copy_from_slice(field_name.as_bytes());
        names.extend_from_slice(&padded);
    }

    let mut flags = Vec::with_capacity(8);
    flags.extend_from_slice(&MX_STRUCT.to_le_bytes());
    flags.extend_from_slice(&0u32.to_le_bytes());

    let mut dims = Vec::with_capacity(8);
    dims.extend_from_slice(&1i32.to_le_bytes());
    dims.extend_from_slice(&1i32.to_le_bytes());

    let mut body = Vec::new();
    body.extend_from_slice(&element(MI_UINT32, &flags));
    body.extend_from_slice(&element(MI_INT32, &dims));
    body.extend_from_slice(&element(MI_INT8, name.as_bytes()));
    body.extend_from_slice(&element(MI_INT32, &(FIELD_NAME_LEN as i32).to_le_bytes()));
    body.extend_from_slice(&element(MI_INT8, &names));
    for (_, matrix) in fields {
        body.extend_from_slice(matrix);
    }
    element(MI_MATRIX, &body)
}

// The 3-bus example case: two branches (one with an off nominal tap), one
// generator on bus 1.

pub fn bus_rows() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 3.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 135.0, 1.0, 1.05, 0.95],
        vec![2.0, 2.0, 20.0, 10.0, 0.0, 0.0, 1.0, 1.0, 0.0, 135.0, 1.0, 1.05, 0.95],
        vec![3.0, 1.0, 45.0, 15.0, 0.0, 0.0, 1.0, 1.0, 0.0, 135.0, 1.0, 1.05, 0.95],
    ]
}

pub fn branch_rows() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 0.01, 0.05, 0.0, 250.0, 250.0, 250.0, 0.0, 0.0, 1.0, -360.0, 360.0],
        vec![2.0, 3.0, 0.02, 0.06, 0.0, 250.0, 250.0, 250.0, 0.98, 0.0, 1.0, -360.0, 360.0],
    ]
}

pub fn gen_rows() -> Vec<Vec<f64>> {
    vec![vec![
        1.0, 80.0, 10.0, 50.0, -50.0, 1.02, 100.0, 1.0, 120.0, 20.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]]
}

pub fn gencost_rows() -> Vec<Vec<f64>> {
    vec![vec![2.0, 0.0, 0.0, 3.0, 0.01, 40.0, 0.0]]
}

/// Field elements of the 3-bus case struct, without `gencost`.
pub fn case3_fields() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("version", char_matrix("", "2")),
        ("baseMVA", scalar("", 100.0)),
        ("bus", numeric_matrix("", &bus_rows())),
        ("gen", numeric_matrix("", &gen_rows())),
        ("branch", numeric_matrix("", &branch_rows())),
    ]
}
