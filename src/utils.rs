use polars::prelude::DataType;

/// Returns true for the dtypes a beta-value sample column may carry.
///
/// Series matrix tables hold floating point beta values, but a column that
/// happens to contain only whole numbers is inferred as an integer type, so
/// integers are accepted as well.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}
