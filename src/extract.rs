use std::collections::HashMap;

use crate::dense::Mat;
use crate::error::ConvertError;
use crate::ppc::PPC;
use crate::read::MatValue;

/// The two on-disk layouts a case file can use.
///
/// `save('case.mat', 'mpc')` stores a single case struct while older
/// exports store the tables as top level variables. A file offering both
/// is read through the struct.
pub(crate) enum RawLayout {
    NamedStruct(HashMap<String, MatValue>),
    FlatMapping(HashMap<String, MatValue>),
}

const REQUIRED_TABLES: [&str; 5] = ["bus", "branch", "gen", "baseMVA", "version"];

pub(crate) fn resolve_layout(
    mut vars: HashMap<String, MatValue>,
    case_name: &str,
) -> Result<RawLayout, ConvertError> {
    match vars.remove(case_name) {
        Some(MatValue::Struct(fields)) => Ok(RawLayout::NamedStruct(fields)),
        // A non-struct under the case name cannot expose the case tables.
        Some(_) => Err(ConvertError::MalformedCaseStructure),
        None => {
            if REQUIRED_TABLES.iter().all(|key| vars.contains_key(*key)) {
                Ok(RawLayout::FlatMapping(vars))
            } else {
                Err(ConvertError::MalformedCaseStructure)
            }
        }
    }
}

/// Pulls the case tables out of a decoded MAT-file payload.
///
/// The payload is consumed; tables move into the returned case without
/// copies. A missing `gencost` is recorded at info level and left `None`,
/// every other missing or mistyped entry is a hard error.
pub fn extract_case(
    vars: HashMap<String, MatValue>,
    case_name: &str,
) -> Result<PPC, ConvertError> {
    let mut fields = match resolve_layout(vars, case_name)? {
        RawLayout::NamedStruct(fields) => {
            log::debug!("reading case tables from struct '{}'", case_name);
            fields
        }
        RawLayout::FlatMapping(vars) => {
            log::debug!("reading case tables from top level variables");
            vars
        }
    };

    let version = take_version(&mut fields)?;
    let base_mva = take_scalar(&mut fields, "baseMVA")?;
    let bus = take_table(&mut fields, "bus")?;
    let gen = take_table(&mut fields, "gen")?;
    let branch = take_table(&mut fields, "branch")?;
    let gencost = match fields.remove("gencost") {
        Some(MatValue::Numeric(m)) => Some(m),
        Some(_) => {
            return Err(ConvertError::malformed_table(
                "gencost",
                "expected a numeric matrix",
            ));
        }
        None => {
            log::info!("gencost is not in mpc");
            None
        }
    };

    Ok(PPC {
        version,
        base_mva,
        bus,
        gen,
        branch,
        gencost,
    })
}

fn take_table(
    fields: &mut HashMap<String, MatValue>,
    name: &'static str,
) -> Result<Mat, ConvertError> {
    match fields.remove(name) {
        Some(MatValue::Numeric(m)) => Ok(m),
        Some(_) => Err(ConvertError::malformed_table(
            name,
            "expected a numeric matrix",
        )),
        None => Err(ConvertError::MissingTable { table: name }),
    }
}

fn take_scalar(
    fields: &mut HashMap<String, MatValue>,
    name: &'static str,
) -> Result<f64, ConvertError> {
    match fields.remove(name) {
        Some(value) => value
            .as_scalar()
            .ok_or_else(|| ConvertError::malformed_table(name, "expected a scalar")),
        None => Err(ConvertError::MissingTable { table: name }),
    }
}

fn take_version(fields: &mut HashMap<String, MatValue>) -> Result<String, ConvertError> {
    match fields.remove("version") {
        Some(MatValue::Char(text)) => Ok(text),
        Some(value) => match value.as_scalar() {
            Some(v) => Ok(format!("{}", v)),
            None => Err(ConvertError::malformed_table(
                "version",
                "expected a character array or scalar",
            )),
        },
        None => Err(ConvertError::MissingTable { table: "version" }),
    }
}
