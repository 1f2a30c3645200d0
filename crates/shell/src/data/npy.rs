//! Feature matrices read from npy files.

use std::path::Path;

use ndarray::Array2;

/// A feature matrix with any of the element types we might read from npy files.
pub enum ShellData {
    Bool(Array2<bool>),
    F32(Array2<f32>),
    F64(Array2<f64>),
    I8(Array2<i8>),
    I16(Array2<i16>),
    I32(Array2<i32>),
    I64(Array2<i64>),
    U8(Array2<u8>),
    U16(Array2<u16>),
    U32(Array2<u32>),
    U64(Array2<u64>),
}

impl ShellData {
    /// The number of rows and columns.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::Bool(a) => a.dim(),
            Self::F32(a) => a.dim(),
            Self::F64(a) => a.dim(),
            Self::I8(a) => a.dim(),
            Self::I16(a) => a.dim(),
            Self::I32(a) => a.dim(),
            Self::I64(a) => a.dim(),
            Self::U8(a) => a.dim(),
            Self::U16(a) => a.dim(),
            Self::U32(a) => a.dim(),
            Self::U64(a) => a.dim(),
        }
    }

    /// The name of the element type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
        }
    }
}

/// Data types we might read from npy files.
pub enum NpyType {
    Bool,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl NpyType {
    /// Reads a 2d array from a npy file, trying each element type in turn.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<ShellData, String> {
        for ty in Self::variants() {
            if let Ok(data) = ty.read_with_type(&path) {
                return Ok(data);
            }
        }
        Err(format!("Failed to read NPY file at path: {}", path.as_ref().display()))
    }

    /// The element types in the order in which they are tried.
    const fn variants() -> &'static [Self] {
        &[
            Self::Bool,
            Self::F32,
            Self::F64,
            Self::I8,
            Self::I16,
            Self::I32,
            Self::I64,
            Self::U8,
            Self::U16,
            Self::U32,
            Self::U64,
        ]
    }

    /// Reads a 2d array from a npy file with a specific element type.
    fn read_with_type<P: AsRef<Path>>(&self, path: P) -> Result<ShellData, String> {
        let path = path.as_ref();
        match self {
            Self::Bool => read_array(path).map(ShellData::Bool),
            Self::F32 => read_array(path).map(ShellData::F32),
            Self::F64 => read_array(path).map(ShellData::F64),
            Self::I8 => read_array(path).map(ShellData::I8),
            Self::I16 => read_array(path).map(ShellData::I16),
            Self::I32 => read_array(path).map(ShellData::I32),
            Self::I64 => read_array(path).map(ShellData::I64),
            Self::U8 => read_array(path).map(ShellData::U8),
            Self::U16 => read_array(path).map(ShellData::U16),
            Self::U32 => read_array(path).map(ShellData::U32),
            Self::U64 => read_array(path).map(ShellData::U64),
        }
    }
}

/// Reads a 2d array of a single element type.
fn read_array<T: ndarray_npy::ReadableElement>(path: &Path) -> Result<Array2<T>, String> {
    ndarray_npy::read_npy(path).map_err(|e| e.to_string())
}

/// Writes an array of distances to a npy file.
pub fn write_distances<T: ndarray_npy::WriteNpyExt, P: AsRef<Path>>(path: P, distances: &T) -> Result<(), String> {
    ndarray_npy::write_npy(path, distances).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use tempdir::TempDir;

    use super::{NpyType, ShellData};

    #[test]
    fn element_types() -> Result<(), String> {
        let tmp_dir = TempDir::new("npy-types").map_err(|e| e.to_string())?;

        let path = tmp_dir.path().join("presence.npy");
        ndarray_npy::write_npy(&path, &array![[true, false], [false, true]]).map_err(|e| e.to_string())?;
        let data = NpyType::read(&path)?;
        assert_eq!(data.type_name(), "bool");
        assert_eq!(data.dim(), (2, 2));

        let path = tmp_dir.path().join("counts.npy");
        ndarray_npy::write_npy(&path, &array![[1_u16, 0, 4]]).map_err(|e| e.to_string())?;
        assert!(matches!(NpyType::read(&path)?, ShellData::U16(_)));

        assert!(NpyType::read(tmp_dir.path().join("missing.npy")).is_err());
        Ok(())
    }
}
