use crate::types::{CellValue, FieldValue};
use dicom_core::PrimitiveValue;
use dicom_object::mem::InMemElement;

use super::tags::trim_padding;

/// Converts a decoded element into a field value
///
/// Sequences and encapsulated pixel data cannot be placed in a cell, so they
/// are summarized by their item or fragment count.
pub fn field_value(elem: &InMemElement) -> FieldValue {
    if let Some(primitive) = elem.value().primitive() {
        return primitive_field_value(primitive);
    }

    if let Some(items) = elem.items() {
        return FieldValue::Scalar(CellValue::Text(format!("<{} items>", items.len())));
    }

    if let Some(fragments) = elem.value().fragments() {
        return FieldValue::Scalar(CellValue::Text(format!(
            "<{} fragments>",
            fragments.len()
        )));
    }

    FieldValue::Empty
}

/// Converts a primitive value, keeping numbers numeric
pub fn primitive_field_value(value: &PrimitiveValue) -> FieldValue {
    let values: Vec<CellValue> = match value {
        PrimitiveValue::Empty => Vec::new(),
        PrimitiveValue::Str(s) => vec![text(s)],
        PrimitiveValue::Strs(strs) => strs.iter().map(|s| text(s)).collect(),
        PrimitiveValue::Tags(tags) => tags
            .iter()
            .map(|t| CellValue::Text(format!("({:04X},{:04X})", t.group(), t.element())))
            .collect(),
        PrimitiveValue::U8(v) => v.iter().map(|&x| CellValue::Int(x.into())).collect(),
        PrimitiveValue::I16(v) => v.iter().map(|&x| CellValue::Int(x.into())).collect(),
        PrimitiveValue::U16(v) => v.iter().map(|&x| CellValue::Int(x.into())).collect(),
        PrimitiveValue::I32(v) => v.iter().map(|&x| CellValue::Int(x.into())).collect(),
        PrimitiveValue::U32(v) => v.iter().map(|&x| CellValue::Int(x.into())).collect(),
        PrimitiveValue::I64(v) => v.iter().map(|&x| CellValue::Int(x)).collect(),
        PrimitiveValue::U64(v) => v
            .iter()
            .map(|&x| match i64::try_from(x) {
                Ok(i) => CellValue::Int(i),
                Err(_) => CellValue::Text(x.to_string()),
            })
            .collect(),
        PrimitiveValue::F32(v) => v.iter().map(|&x| CellValue::Float(x.into())).collect(),
        PrimitiveValue::F64(v) => v.iter().map(|&x| CellValue::Float(x)).collect(),
        // Dates, times and date-times keep their encoded text form
        other => other.to_multi_str().iter().map(|s| text(s)).collect(),
    };

    FieldValue::from_values(values)
}

fn text(s: &str) -> CellValue {
    CellValue::Text(trim_padding(s).to_string())
}
