use std::fmt;

/// Delimiter placed between values of a multi-valued field
///
/// Matches the DICOM value multiplicity delimiter.
pub const MULTI_VALUE_DELIMITER: &str = "\\";

/// A single spreadsheet cell value as decoded from a DICOM element
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

/// Value of one requested field in one dataset
///
/// The multiplicity of the element is carried by the variant, so callers
/// never inspect the shape of the decoded value after the fact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum FieldValue {
    /// Field absent from the dataset, or present with no value
    Empty,
    /// Exactly one value
    Scalar(CellValue),
    /// Two or more values, kept together in one cell
    Multi(Vec<CellValue>),
}

impl FieldValue {
    /// Builds a field value from a list of decoded values
    ///
    /// A one-element list is unwrapped to a scalar, an empty list is `Empty`.
    pub fn from_values(mut values: Vec<CellValue>) -> Self {
        match values.len() {
            0 => FieldValue::Empty,
            1 => FieldValue::Scalar(values.remove(0)),
            _ => FieldValue::Multi(values),
        }
    }

    /// Returns true for the empty marker
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Renders a multi-valued field as one composite text cell
    ///
    /// Scalars and the empty marker pass through unchanged.
    pub fn to_cell(&self) -> Option<CellValue> {
        match self {
            FieldValue::Empty => None,
            FieldValue::Scalar(v) => Some(v.clone()),
            FieldValue::Multi(values) => Some(CellValue::Text(
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(MULTI_VALUE_DELIMITER),
            )),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_cell() {
            Some(cell) => write!(f, "{}", cell),
            None => Ok(()),
        }
    }
}

/// One output row, positionally aligned with the tag list
pub type ResultRow = Vec<FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_unwraps_single() {
        let value = FieldValue::from_values(vec![CellValue::from("ABC")]);
        assert_eq!(value, FieldValue::Scalar(CellValue::Text("ABC".to_string())));
    }

    #[test]
    fn test_from_values_empty() {
        assert!(FieldValue::from_values(vec![]).is_empty());
    }

    #[test]
    fn test_multi_renders_one_cell() {
        let value = FieldValue::from_values(vec![
            CellValue::from("ORIGINAL"),
            CellValue::from("PRIMARY"),
            CellValue::from("AXIAL"),
        ]);
        assert_eq!(
            value.to_cell(),
            Some(CellValue::Text("ORIGINAL\\PRIMARY\\AXIAL".to_string()))
        );
    }

    #[test]
    fn test_multi_numbers_render_as_text() {
        let value = FieldValue::from_values(vec![CellValue::Float(0.5), CellValue::Float(0.25)]);
        assert_eq!(value.to_string(), "0.5\\0.25");
    }

    #[test]
    fn test_scalar_keeps_number() {
        let value = FieldValue::from_values(vec![CellValue::Int(512)]);
        assert_eq!(value.to_cell(), Some(CellValue::Int(512)));
    }
}
